//! Scrolling stock ticker

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::animation::{marquee_window, ticker_offset};
use crate::config::Quote;
use crate::theme::{change_color, fade, ACCENT, BG_PANEL, ROUNDED_BORDERS};

const QUOTE_GAP: &str = "   ";

/// One pass of the ticker text, e.g. "AAPL: +1.25%   GOOGL: +0.87%   "
pub fn ticker_strip(stocks: &[Quote]) -> String {
    stocks
        .iter()
        .map(|q| format!("{}: {}{}", q.symbol, q.change, QUOTE_GAP))
        .collect()
}

pub fn render_ticker(area: Rect, stocks: &[Quote], elapsed_ms: i64, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(fade(ACCENT, 0.28)))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);

    let strip = ticker_strip(stocks);
    let strip_len = strip.chars().count();
    let visible = marquee_window(&strip, ticker_offset(elapsed_ms, strip_len), inner.width as usize);

    frame.render_widget(Paragraph::new(color_quotes(&visible)).block(block), area);
}

/// Color each change figure by sign, leaving symbols in the accent color
fn color_quotes(visible: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let flush = |word: &mut String, spans: &mut Vec<Span<'static>>| {
        if word.is_empty() {
            return;
        }
        let is_change = word.ends_with('%');
        let style = if is_change {
            Style::default().fg(change_color(word))
        } else {
            Style::default().fg(ACCENT)
        };
        spans.push(Span::styled(std::mem::take(word), style));
    };

    for c in visible.chars() {
        if c == ' ' {
            flush(&mut word, &mut spans);
            spans.push(Span::raw(" "));
        } else {
            word.push(c);
        }
    }
    flush(&mut word, &mut spans);
    Line::from(spans)
}
