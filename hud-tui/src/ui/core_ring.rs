//! Rotating core ring on the voice page

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Points},
        Paragraph,
    },
};

use crate::animation::{glow_opacity, glow_scale, ring_angles};
use crate::theme::{fade, ACCENT, CORE_CYAN};

/// Points sampled around each ring
const RING_SEGMENTS: usize = 96;
const ORBIT_DOTS: usize = 8;
const MIN_CANVAS_WIDTH: u16 = 4;
const MIN_CANVAS_HEIGHT: u16 = 2;

/// Points along a ring, drawn in dashes of `dash` points when `dash > 0`
pub fn dashed_ring(radius: f64, rotation_deg: f64, dash: usize) -> Vec<(f64, f64)> {
    let rotation = rotation_deg.to_radians();
    (0..RING_SEGMENTS)
        .filter(|k| dash == 0 || (k / dash) % 2 == 0)
        .map(|k| {
            let theta = rotation + (k as f64) * std::f64::consts::TAU / RING_SEGMENTS as f64;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Evenly spaced dots on a circle, turned by `rotation_deg`
pub fn orbit_dots(radius: f64, rotation_deg: f64, count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = (rotation_deg + i as f64 * 360.0 / count as f64).to_radians();
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Canvas bounds that keep circles round in terminal cells (twice as tall as wide)
fn bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let ratio = f64::from(area.width.max(1)) / (f64::from(area.height.max(1)) * 2.0);
    let (x, y) = if ratio >= 1.0 { (ratio, 1.0) } else { (1.0, 1.0 / ratio) };
    ([-x * 1.05, x * 1.05], [-y * 1.05, y * 1.05])
}

pub fn render_core_ring(area: Rect, elapsed_ms: i64, run_time: &str, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Rings
            Constraint::Length(1), // Run time
            Constraint::Length(1), // Status
        ])
        .split(area);

    let glow_color = fade(CORE_CYAN, glow_opacity(elapsed_ms));

    // Too narrow mid-slide to draw anything recognisable
    if layout[0].width >= MIN_CANVAS_WIDTH && layout[0].height >= MIN_CANVAS_HEIGHT {
        render_rings(layout[0], elapsed_ms, frame);
    }

    let timer = Paragraph::new(Line::from(Span::styled(
        run_time.to_string(),
        Style::default().fg(CORE_CYAN).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(timer, layout[1]);

    let status = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(glow_color)),
        Span::styled("Listening...", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(status, layout[2]);
}

fn render_rings(area: Rect, elapsed_ms: i64, frame: &mut Frame) {
    let angles = ring_angles(elapsed_ms);
    let glow = glow_scale(elapsed_ms);
    let glow_color = fade(CORE_CYAN, glow_opacity(elapsed_ms));
    let (x_bounds, y_bounds) = bounds(area);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            // Outer rings: slow, dashed every other ring
            for i in 0..5 {
                let radius = 1.0 - i as f64 * 0.06;
                let dash = if i % 2 == 0 { 4 } else { 0 };
                let level = 0.3 + (i as f64 / 5.0) * 0.4;
                ctx.draw(&Points {
                    coords: &dashed_ring(radius, angles.outer, dash),
                    color: fade(CORE_CYAN, level),
                });
            }
            // Middle rings: counter-rotating
            for i in 0..3 {
                let radius = 0.7 - i as f64 * 0.08;
                ctx.draw(&Points {
                    coords: &dashed_ring(radius, angles.middle, if i % 2 == 0 { 2 } else { 0 }),
                    color: fade(CORE_CYAN, 0.5),
                });
            }
            ctx.layer();
            // Inner rings and orbiting dots: fastest
            for i in 0..2 {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.4 - i as f64 * 0.1,
                    color: fade(CORE_CYAN, 0.6),
                });
            }
            ctx.draw(&Points {
                coords: &orbit_dots(0.5, angles.inner, ORBIT_DOTS),
                color: fade(CORE_CYAN, 0.8),
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.12 * glow,
                color: glow_color,
            });
        });
    frame.render_widget(canvas, area);
}
