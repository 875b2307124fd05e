//! UI helper functions

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};

use crate::theme::{fade, BG_PANEL, GLOW_CYAN, ROUNDED_BORDERS, TEXT_TITLE};

/// Border level of HUD panels relative to the glow color
const PANEL_BORDER_LEVEL: f64 = 0.45;

/// Rounded glass panel with a glowing rim
pub fn hud_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(fade(GLOW_CYAN, PANEL_BORDER_LEVEL)))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(TEXT_TITLE)))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(BG_PANEL))
}

/// Wrap text on word boundaries, counting characters rather than bytes.
///
/// Words longer than `max_width` are split across lines.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        if line_len > 0 && line_len + 1 + word.len() > max_width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len == 0 {
            while word.len() > max_width {
                let rest = word.split_off(max_width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
        } else {
            line.push(' ');
            line_len += 1;
        }
        line_len += word.len();
        line.extend(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Rects for the voice and chat pages given the slider offset.
///
/// `offset` is in columns, from 0 (voice only) to `-area.width` (chat only).
pub fn split_pages(area: Rect, offset: f64) -> (Option<Rect>, Option<Rect>) {
    let shift = (-offset).round().clamp(0.0, f64::from(area.width)) as u16;
    let voice_width = area.width - shift;

    let voice = (voice_width > 0).then(|| Rect::new(area.x, area.y, voice_width, area.height));
    let chat = (shift > 0).then(|| Rect::new(area.x + voice_width, area.y, shift, area.height));
    (voice, chat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(
            wrap_text("hello world foo bar", 10),
            vec!["hello", "world foo", "bar"]
        );
    }

    #[test]
    fn test_wrap_text_counts_chars() {
        // "72°F" is 4 chars but 5 bytes
        assert_eq!(wrap_text("it is 72°F ok", 10), vec!["it is 72°F", "ok"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_split_pages_ends() {
        let area = Rect::new(2, 3, 40, 10);
        assert_eq!(split_pages(area, 0.0), (Some(area), None));
        assert_eq!(split_pages(area, -40.0), (None, Some(area)));
    }

    #[test]
    fn test_split_pages_midway() {
        let area = Rect::new(0, 0, 40, 10);
        let (voice, chat) = split_pages(area, -10.4);
        assert_eq!(voice, Some(Rect::new(0, 0, 30, 10)));
        assert_eq!(chat, Some(Rect::new(30, 0, 10, 10)));
    }
}
