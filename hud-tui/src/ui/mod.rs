//! UI module for hud-tui
//!
//! This module lays out the HUD screen and renders its widgets: dashboard
//! panels, the stock ticker, the voice/chat pager and the tab bar.

mod chat;
mod core_ring;
mod helpers;
mod panels;
mod ticker;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Tabs},
};

use crate::app::App;
use crate::models::{AssistantPage, Tab};
use crate::theme::{fade, ACCENT, BG_INK, GLOW_CYAN, TEXT_MUTED};

pub use helpers::split_pages;

/// Draw one full frame
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_INK)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Active tab
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    match app.tab {
        Tab::Home => draw_home(frame, main_layout[0], app),
        Tab::Explore => draw_explore(frame, main_layout[0], app),
    }
    render_tab_bar(main_layout[1], app.tab, frame);
    render_key_hints(main_layout[2], app, frame);
}

fn draw_home(frame: &mut Frame, area: Rect, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // System load + news
            Constraint::Length(3), // Ticker
            Constraint::Min(5),    // Pager
            Constraint::Length(1), // Page dots
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[0]);

    let elapsed = app.elapsed_ms();
    let run_time = app.run_time();

    panels::render_system_load(top[0], &app.config, &app.spark, frame);
    panels::render_news(top[1], &app.config.news, &run_time, frame);
    ticker::render_ticker(layout[1], &app.config.stocks, elapsed, frame);

    app.set_pager_area(layout[2]);
    let (voice, chat) = split_pages(layout[2], app.pager.offset());
    if let Some(voice) = voice {
        core_ring::render_core_ring(voice, elapsed, &run_time, frame);
    }
    if let Some(chat_area) = chat {
        chat::render_chat(chat_area, &app.chat, &app.config.assistant_name, frame);
    }

    render_page_dots(layout[3], app.pager.dot_levels(), frame);
}

fn draw_explore(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stats
            Constraint::Length(3), // Ticker
            Constraint::Min(3),    // Market chart
        ])
        .split(area);

    panels::render_stats(layout[0], &app.config.stats, frame);
    ticker::render_ticker(layout[1], &app.config.stocks, app.elapsed_ms(), frame);
    panels::render_market_chart(layout[2], &app.spark, app.config.spark_seed, frame);
}

fn render_page_dots(area: Rect, (voice, chat): (f64, f64), frame: &mut Frame) {
    let dots = Line::from(vec![
        Span::styled("●", Style::default().fg(fade(GLOW_CYAN, voice))),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(fade(GLOW_CYAN, chat))),
    ]);
    frame.render_widget(Paragraph::new(dots).alignment(Alignment::Center), area);
}

fn render_tab_bar(area: Rect, tab: Tab, frame: &mut Frame) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(tab.index())
        .style(Style::default().fg(TEXT_MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider("│");
    frame.render_widget(tabs, area);
}

fn render_key_hints(area: Rect, app: &App, frame: &mut Frame) {
    let hints = match (app.tab, app.pager.page()) {
        (Tab::Home, AssistantPage::Chat) => {
            " Type to chat | Enter: Send | Esc/←: Voice | Tab: Explore | Ctrl+C: Quit "
        }
        (Tab::Home, AssistantPage::Voice) => {
            " q: Quit | →/l or drag: Chat | Tab/2: Explore "
        }
        (Tab::Explore, _) => " q: Quit | Tab/1: Home ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(BG_INK).bg(ACCENT));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::rc::Rc;

    use ratatui::backend::TestBackend;
    use tokio::runtime::Builder;

    use crate::clock::ManualClock;
    use crate::config::HudConfig;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_home_frame_shows_clock_and_panels() {
        let rt = Builder::new_current_thread().enable_time().build().unwrap();
        let clock = Rc::new(ManualClock::new(0));
        let mut app = App::new(HudConfig::default(), None, Box::new(clock.clone()), rt.handle().clone());
        clock.advance(61_250);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("00:01:01:25"));
        assert!(text.contains("System Load"));
        assert!(text.contains("81%"));
        assert!(text.contains("Listening..."));
        assert_eq!(app.pager_area.width, 100);
    }

    #[test]
    fn test_explore_frame_shows_stats() {
        let rt = Builder::new_current_thread().enable_time().build().unwrap();
        let mut app = App::new(
            HudConfig::default(),
            None,
            Box::new(ManualClock::new(0)),
            rt.handle().clone(),
        );
        app.tab = Tab::Explore;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Weather"));
        assert!(text.contains("Market"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let rt = Builder::new_current_thread().enable_time().build().unwrap();
        let mut app = App::new(
            HudConfig::default(),
            None,
            Box::new(ManualClock::new(0)),
            rt.handle().clone(),
        );
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
