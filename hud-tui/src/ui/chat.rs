//! Chat page rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{ChatLog, Sender};
use crate::theme::{
    fade, ACCENT, BG_PANEL, GAIN, GLOW_CYAN, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_TITLE,
};

use super::helpers::{hud_block, wrap_text};

/// Bubbles take at most this share of the transcript width
const BUBBLE_WIDTH_PERCENT: usize = 80;

/// Transcript lines, wrapped to `width`, bot bubbles left and user bubbles right
pub fn transcript_lines(chat: &ChatLog, width: usize) -> Vec<Line<'static>> {
    let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(1);
    let mut lines = Vec::new();

    for message in chat.messages() {
        let (style, alignment) = match message.sender {
            Sender::Bot => (Style::default().fg(TEXT_PRIMARY).bg(BG_PANEL), Alignment::Left),
            Sender::User => (Style::default().fg(ACCENT), Alignment::Right),
        };
        for text in wrap_text(&message.text, bubble_width) {
            lines.push(Line::from(Span::styled(text, style)).alignment(alignment));
        }
        lines.push(Line::default());
    }
    lines
}

pub fn render_chat(area: Rect, chat: &ChatLog, assistant_name: &str, frame: &mut Frame) {
    let block = hud_block(assistant_name).title_top(
        Line::from(Span::styled(
            format!(" {} ", chat.status_label()),
            Style::default().fg(if chat.is_waiting() { TEXT_MUTED } else { GAIN }),
        ))
        .right_aligned(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Transcript
            Constraint::Length(3), // Composer
        ])
        .split(inner);

    // Pin the transcript to its newest lines
    let lines = transcript_lines(chat, layout[0].width as usize);
    let overflow = lines.len().saturating_sub(layout[0].height as usize);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), layout[0]);

    let composer_text = if chat.composer().is_empty() {
        Span::styled("Type your message...", Style::default().fg(TEXT_MUTED))
    } else {
        Span::styled(format!("{}▏", chat.composer()), Style::default().fg(TEXT_PRIMARY))
    };
    let composer = Paragraph::new(Line::from(composer_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(fade(GLOW_CYAN, 0.6)))
            .title_bottom(
                Line::from(Span::styled(" Enter: Send ", Style::default().fg(TEXT_TITLE)))
                    .right_aligned(),
            ),
    );
    frame.render_widget(composer, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_separates_messages() {
        let chat = ChatLog::seeded("Hi");
        let lines = transcript_lines(&chat, 200);
        // one line per short message plus a spacer after each
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].alignment, Some(Alignment::Left));
        assert_eq!(lines[2].alignment, Some(Alignment::Right));
    }

    #[test]
    fn test_transcript_wraps_to_width() {
        let chat = ChatLog::seeded("one two three four five six");
        let lines = transcript_lines(&chat, 10);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }
}
