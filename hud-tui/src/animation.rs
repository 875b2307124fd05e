//! Time-driven animation values.
//!
//! Every function here is a pure function of elapsed milliseconds, so a frame
//! can be redrawn at any rate and tests can sample exact instants.

use std::f64::consts::PI;

/// One full turn of the outer rings (clockwise)
pub const OUTER_RING_PERIOD_MS: i64 = 25_000;
/// One full turn of the middle rings (counter-clockwise)
pub const MIDDLE_RING_PERIOD_MS: i64 = 18_000;
/// One full turn of the inner rings and orbiting dots (clockwise)
pub const INNER_RING_PERIOD_MS: i64 = 12_000;
/// Glow grows for this long, then shrinks for the same time
pub const GLOW_HALF_PERIOD_MS: i64 = 2_000;
/// Time for the ticker strip to scroll its full length once
pub const TICKER_LOOP_MS: i64 = 10_000;

const GLOW_MIN_SCALE: f64 = 1.0;
const GLOW_MAX_SCALE: f64 = 1.2;
const GLOW_MIN_OPACITY: f64 = 0.6;
const GLOW_MAX_OPACITY: f64 = 0.9;

/// Rotation of each ring group, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAngles {
    pub outer: f64,
    pub middle: f64,
    pub inner: f64,
}

fn cycle_fraction(elapsed_ms: i64, period_ms: i64) -> f64 {
    elapsed_ms.max(0).rem_euclid(period_ms) as f64 / period_ms as f64
}

pub fn ring_angles(elapsed_ms: i64) -> RingAngles {
    RingAngles {
        outer: cycle_fraction(elapsed_ms, OUTER_RING_PERIOD_MS) * 360.0,
        middle: -cycle_fraction(elapsed_ms, MIDDLE_RING_PERIOD_MS) * 360.0,
        inner: cycle_fraction(elapsed_ms, INNER_RING_PERIOD_MS) * 360.0,
    }
}

/// Core glow scale, easing between 1.0 and 1.2 and back
pub fn glow_scale(elapsed_ms: i64) -> f64 {
    let phase = cycle_fraction(elapsed_ms, GLOW_HALF_PERIOD_MS * 2) * 2.0;
    let t = if phase <= 1.0 { phase } else { 2.0 - phase };
    let eased = (1.0 - (PI * t).cos()) / 2.0;
    GLOW_MIN_SCALE + (GLOW_MAX_SCALE - GLOW_MIN_SCALE) * eased
}

/// Glow opacity tracking the scale
pub fn glow_opacity(elapsed_ms: i64) -> f64 {
    let t = (glow_scale(elapsed_ms) - GLOW_MIN_SCALE) / (GLOW_MAX_SCALE - GLOW_MIN_SCALE);
    GLOW_MIN_OPACITY + (GLOW_MAX_OPACITY - GLOW_MIN_OPACITY) * t.clamp(0.0, 1.0)
}

/// Characters the ticker strip has scrolled at `elapsed_ms`
pub fn ticker_offset(elapsed_ms: i64, strip_len: usize) -> usize {
    if strip_len == 0 {
        return 0;
    }
    let len = strip_len as i64;
    let scrolled = elapsed_ms.max(0).saturating_mul(len) / TICKER_LOOP_MS;
    scrolled.rem_euclid(len) as usize
}

/// Visible `width` characters of a looping strip starting at `offset`
pub fn marquee_window(strip: &str, offset: usize, width: usize) -> String {
    let chars: Vec<char> = strip.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    (0..width).map(|i| chars[(offset + i) % chars.len()]).collect()
}
