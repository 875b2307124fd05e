//! Theme module for hud-tui
//!
//! Centralized color palette and styling constants for the "dawn" HUD look:
//! a periwinkle accent over deep twilight panels, with cyan for the core.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors - Twilight Palette
// ============================================================================

/// Screen background - deep twilight blue-black (#0a0e17)
pub const BG_INK: Color = Color::Rgb(10, 14, 23);

/// Panel background - soft navy (#0e1522)
pub const BG_PANEL: Color = Color::Rgb(14, 21, 34);

/// Panel border - dimmed periwinkle (#3a4560)
pub const BORDER_DIM: Color = Color::Rgb(58, 69, 96);

// ============================================================================
// Accent Colors
// ============================================================================

/// Periwinkle accent (#a7c5ff)
pub const ACCENT: Color = Color::Rgb(167, 197, 255);

/// Core ring cyan (#00ffff)
pub const CORE_CYAN: Color = Color::Rgb(0, 255, 255);

/// Panel glow cyan (#4ff3e1)
pub const GLOW_CYAN: Color = Color::Rgb(79, 243, 225);

// ============================================================================
// Market Colors
// ============================================================================

/// Gaining quote (#4ade80)
pub const GAIN: Color = Color::Rgb(74, 222, 128);

/// Losing quote (#f87171)
pub const LOSS: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text (#f2f6ff)
pub const TEXT_PRIMARY: Color = Color::Rgb(242, 246, 255);

/// Panel titles (#c9d4f7)
pub const TEXT_TITLE: Color = Color::Rgb(201, 212, 247);

/// Labels and hints (#6e7ba6)
pub const TEXT_MUTED: Color = Color::Rgb(110, 123, 166);

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Blend an RGB color towards the screen background.
///
/// `level` 1.0 keeps the color, 0.0 yields the background.
pub fn fade(color: Color, level: f64) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, BG_INK) else {
        return color;
    };
    let t = level.clamp(0.0, 1.0);
    let mix = |c: u8, base: u8| (f64::from(base) + (f64::from(c) - f64::from(base)) * t).round() as u8;
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}

/// Color for a signed percentage string such as "+1.25%"
pub fn change_color(change: &str) -> Color {
    if change.trim_start().starts_with('-') {
        LOSS
    } else {
        GAIN
    }
}
