//! Dashboard panel rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Sparkline},
};

use crate::config::{HudConfig, Stat};
use crate::spark::to_bars;
use crate::theme::{ACCENT, BG_PANEL, BORDER_DIM, ROUNDED_BORDERS, TEXT_MUTED, TEXT_TITLE};

use super::helpers::hud_block;

/// Render the system load panel: current percentage over the market sparkline
pub fn render_system_load(area: Rect, config: &HudConfig, spark: &[f64], frame: &mut Frame) {
    let block = hud_block("System Load");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Metric
            Constraint::Min(1),    // Sparkline
        ])
        .split(inner);

    let metric = Paragraph::new(Line::from(Span::styled(
        format!("{}%", config.system_load_percent()),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(metric, layout[0]);

    // Eighths per row give the sparkline its full vertical resolution
    let height = u64::from(layout[1].height.max(1)) * 8;
    let sparkline = Sparkline::default()
        .data(to_bars(spark, height))
        .max(height)
        .style(Style::default().fg(ACCENT));
    frame.render_widget(sparkline, layout[1]);
}

/// Render headlines with the run-time clock underneath
pub fn render_news(area: Rect, headlines: &[String], run_time: &str, frame: &mut Frame) {
    let block = hud_block("NEWS");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<Line> = headlines
        .iter()
        .map(|h| Line::from(Span::styled(format!("• {}", h), Style::default().fg(ACCENT))))
        .collect();
    frame.render_widget(Paragraph::new(items), layout[0]);

    let timer = Paragraph::new(Line::from(Span::styled(
        run_time.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(timer, layout[1]);
}

/// Render label/value stat cards side by side
pub fn render_stats(area: Rect, stats: &[Stat], frame: &mut Frame) {
    if stats.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, stats.len() as u32); stats.len()];
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, card_area) in stats.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_DIM))
            .style(Style::default().bg(BG_PANEL));

        let content = vec![
            Line::from(Span::styled(stat.label.clone(), Style::default().fg(TEXT_TITLE))),
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *card_area);
    }
}

/// Render the explore tab's large market chart
pub fn render_market_chart(area: Rect, spark: &[f64], seed: i32, frame: &mut Frame) {
    let block = hud_block("Market").title_bottom(Line::from(Span::styled(
        format!(" seed {} ", seed),
        Style::default().fg(TEXT_MUTED),
    )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = u64::from(inner.height.max(1)) * 8;
    let sparkline = Sparkline::default()
        .data(to_bars(spark, height))
        .max(height)
        .style(Style::default().fg(ACCENT));
    frame.render_widget(sparkline, inner);
}
