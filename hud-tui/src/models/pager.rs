//! Two-page slider between the voice and chat views
//!
//! The offset `x` runs from 0 (voice page fully shown) to `-width` (chat page
//! fully shown). Dragging moves it directly; releasing picks a target page and
//! a damped spring carries the offset there over the following frames.

use super::enums::AssistantPage;

/// Release speed (columns/second) that flips pages regardless of position.
/// Roughly 600 points/second at 8 points per terminal column.
pub const FLICK_COLUMNS_PER_SEC: f64 = 75.0;

/// A pointer held still this long before release has no flick speed
const RELEASE_WINDOW_MS: i64 = 100;

const SPRING_STIFFNESS: f64 = 160.0;
const SPRING_DAMPING: f64 = 14.0;
const SETTLE_DISTANCE: f64 = 0.01;
const SETTLE_SPEED: f64 = 0.5;
/// Largest integration step, in milliseconds
const MAX_SUBSTEP_MS: f64 = 4.0;

/// Dot emphasis at the active and inactive ends of the slide
const DOT_ACTIVE: f64 = 1.0;
const DOT_INACTIVE: f64 = 0.35;

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_x: f64,
    origin_col: f64,
    last_col: f64,
    last_ms: i64,
}

#[derive(Debug, Clone)]
pub struct Pager {
    width: f64,
    x: f64,
    velocity: f64,
    target: AssistantPage,
    drag: Option<Drag>,
    drag_velocity: f64,
}

impl Pager {
    pub fn new(width: u16) -> Self {
        Self {
            width: f64::from(width.max(1)),
            x: 0.0,
            velocity: 0.0,
            target: AssistantPage::Voice,
            drag: None,
            drag_velocity: 0.0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.x
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page the slider is heading to (or resting on)
    pub fn page(&self) -> AssistantPage {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_settled(&self) -> bool {
        self.drag.is_none() && self.x == self.target_offset() && self.velocity == 0.0
    }

    /// 0.0 on the voice page, 1.0 on the chat page
    pub fn progress(&self) -> f64 {
        (-self.x / self.width).clamp(0.0, 1.0)
    }

    /// Emphasis for the (voice, chat) page dots
    pub fn dot_levels(&self) -> (f64, f64) {
        let p = self.progress();
        (lerp(DOT_ACTIVE, DOT_INACTIVE, p), lerp(DOT_INACTIVE, DOT_ACTIVE, p))
    }

    pub fn begin_drag(&mut self, col: u16, now_ms: i64) {
        let col = f64::from(col);
        self.drag = Some(Drag {
            start_x: self.x,
            origin_col: col,
            last_col: col,
            last_ms: now_ms,
        });
        self.velocity = 0.0;
        self.drag_velocity = 0.0;
    }

    pub fn drag_to(&mut self, col: u16, now_ms: i64) {
        let Some(mut drag) = self.drag else {
            return;
        };
        let col = f64::from(col);
        self.x = (drag.start_x + (col - drag.origin_col)).clamp(-self.width, 0.0);

        let dt = now_ms - drag.last_ms;
        if dt > 0 {
            self.drag_velocity = (col - drag.last_col) * 1000.0 / dt as f64;
            drag.last_col = col;
            drag.last_ms = now_ms;
        }
        self.drag = Some(drag);
    }

    /// Release the drag and pick the page to settle on
    pub fn end_drag(&mut self, now_ms: i64) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let v = if now_ms - drag.last_ms > RELEASE_WINDOW_MS {
            0.0
        } else {
            self.drag_velocity
        };
        self.target = if v <= -FLICK_COLUMNS_PER_SEC {
            AssistantPage::Chat
        } else if v >= FLICK_COLUMNS_PER_SEC {
            AssistantPage::Voice
        } else if self.x < -self.width / 2.0 {
            AssistantPage::Chat
        } else {
            AssistantPage::Voice
        };
        self.velocity = v;
        self.drag_velocity = 0.0;
    }

    /// Animate towards `page`
    pub fn show(&mut self, page: AssistantPage) {
        self.drag = None;
        self.target = page;
    }

    /// Keep the current page when the area changes size
    pub fn resize(&mut self, width: u16) {
        let progress = self.progress();
        self.width = f64::from(width.max(1));
        self.x = -progress * self.width;
        if self.drag.is_none() {
            self.x = self.target_offset();
            self.velocity = 0.0;
        }
    }

    /// Advance the spring by `dt_ms` milliseconds
    pub fn step(&mut self, dt_ms: u64) {
        if self.drag.is_some() {
            return;
        }
        let target = self.target_offset();
        let mut remaining = dt_ms as f64;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_MS);
            remaining -= h;
            let dt = h / 1000.0;
            let accel = -SPRING_STIFFNESS * (self.x - target) - SPRING_DAMPING * self.velocity;
            self.velocity += accel * dt;
            self.x += self.velocity * dt;
        }
        if (self.x - target).abs() < SETTLE_DISTANCE && self.velocity.abs() < SETTLE_SPEED {
            self.x = target;
            self.velocity = 0.0;
        }
    }

    fn target_offset(&self) -> f64 {
        match self.target {
            AssistantPage::Voice => 0.0,
            AssistantPage::Chat => -self.width,
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
