//! Application state and core logic for the HUD.
//!
//! This module contains the `App` struct which holds all state for the
//! dashboard: the run clock, the memoized sparkline, the voice/chat pager,
//! the chat mockup and tab navigation.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::clock::{Clock, RunClock};
use crate::config::{self, HudConfig, Overrides};
use crate::models::{AssistantPage, ChatLog, Pager, Tab, STUB_REPLY};
use crate::spark::spark_series;

/// Application state
pub struct App {
    pub config: HudConfig,
    pub config_path: Option<PathBuf>,
    // Command-line values re-applied on every reload
    pub overrides: Overrides,
    pub config_needs_reload: Arc<Mutex<bool>>,
    pub run_clock: RunClock<Box<dyn Clock>>,
    pub tab: Tab,
    pub pager: Pager,
    pub chat: ChatLog,
    // Sparkline samples, generated once per config
    pub spark: Vec<f64>,
    // Area the pager was last drawn in (for mouse hit testing)
    pub pager_area: Rect,
    pub should_quit: bool,
    last_tick_ms: i64,
    runtime: Handle,
    reply_tx: UnboundedSender<String>,
    reply_rx: UnboundedReceiver<String>,
}

impl App {
    pub fn new(
        config: HudConfig,
        config_path: Option<PathBuf>,
        clock: Box<dyn Clock>,
        runtime: Handle,
    ) -> Self {
        let run_clock = RunClock::new(clock);
        let spark = spark_series(config.spark_points, config.spark_seed);
        let chat = ChatLog::seeded(&config.greeting);
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        Self {
            config,
            config_path,
            overrides: Overrides::default(),
            config_needs_reload: Arc::new(Mutex::new(false)),
            run_clock,
            tab: Tab::default(),
            pager: Pager::new(1),
            chat,
            spark,
            pager_area: Rect::default(),
            should_quit: false,
            last_tick_ms: 0,
            runtime,
            reply_tx,
            reply_rx,
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.run_clock.elapsed_ms()
    }

    /// Run time as shown on the HUD clocks
    pub fn run_time(&self) -> String {
        self.run_clock.display()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_ms)
    }

    /// True when keystrokes go to the chat composer
    pub fn is_composing(&self) -> bool {
        self.tab == Tab::Home && self.pager.page() == AssistantPage::Chat
    }

    /// Advance animations and collect async results. Called once per frame.
    pub fn tick(&mut self) {
        let now = self.elapsed_ms();
        let dt = (now - self.last_tick_ms).max(0) as u64;
        self.last_tick_ms = now;

        if !self.pager.is_settled() {
            self.pager.step(dt);
        }
        self.drain_replies();
        self.reload_config_if_needed();
    }

    /// Record where the pager is drawn, resizing it if the width changed
    pub fn set_pager_area(&mut self, area: Rect) {
        if f64::from(area.width.max(1)) != self.pager.width() {
            self.pager.resize(area.width);
        }
        self.pager_area = area;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => self.tab = self.tab.toggle(),
            KeyCode::Left if self.tab == Tab::Home => self.pager.show(AssistantPage::Voice),
            KeyCode::Right if self.tab == Tab::Home => self.pager.show(AssistantPage::Chat),
            KeyCode::Esc if self.is_composing() => self.pager.show(AssistantPage::Voice),
            _ if self.is_composing() => self.handle_composer_key(key.code),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.tab = Tab::Home,
            KeyCode::Char('2') => self.tab = Tab::Explore,
            KeyCode::Char('h') if self.tab == Tab::Home => self.pager.show(AssistantPage::Voice),
            KeyCode::Char('l') if self.tab == Tab::Home => self.pager.show(AssistantPage::Chat),
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.send_message(),
            KeyCode::Backspace => self.chat.backspace(),
            KeyCode::Char(c) => self.chat.push_char(c),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.tab != Tab::Home {
            return;
        }
        let now = self.elapsed_ms();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.in_pager(mouse.column, mouse.row) => {
                self.pager.begin_drag(mouse.column, now);
            }
            MouseEventKind::Drag(MouseButton::Left) => self.pager.drag_to(mouse.column, now),
            MouseEventKind::Up(MouseButton::Left) => {
                if self.pager.is_dragging() {
                    self.pager.end_drag(now);
                    tracing::debug!(page = ?self.pager.page(), "pager released");
                }
            }
            _ => {}
        }
    }

    fn in_pager(&self, col: u16, row: u16) -> bool {
        let a = self.pager_area;
        col >= a.x && col < a.x.saturating_add(a.width) && row >= a.y && row < a.y.saturating_add(a.height)
    }

    /// Submit the composer and schedule the canned reply
    pub fn send_message(&mut self) {
        let Some(text) = self.chat.submit() else {
            return;
        };
        tracing::info!(chars = text.chars().count(), "chat message sent");

        let tx = self.reply_tx.clone();
        let delay = Duration::from_millis(self.config.reply_delay_ms);
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(STUB_REPLY.to_string()).is_err() {
                tracing::debug!("reply dropped, app already closed");
            }
        });
    }

    fn drain_replies(&mut self) {
        while let Ok(reply) = self.reply_rx.try_recv() {
            self.chat.receive_reply(reply);
        }
    }

    /// Reload the config from disk if the watcher flagged a change
    pub fn reload_config_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.config_needs_reload.lock() else {
                return;
            };
            std::mem::take(&mut *flag)
        };
        if !needs_reload {
            return;
        }
        let Some(path) = self.config_path.clone() else {
            return;
        };

        let loaded = config::load_from(&path).and_then(|config| {
            let config = self.overrides.apply(config);
            config.validate()?;
            Ok(config)
        });
        match loaded {
            Ok(config) => {
                tracing::info!(path = %path.display(), "configuration reloaded");
                self.apply_config(config);
            }
            Err(e) => tracing::warn!(error = %e, "ignoring invalid configuration"),
        }
    }

    /// Swap in a new config, regenerating the sparkline if its inputs changed
    pub fn apply_config(&mut self, config: HudConfig) {
        if config.spark_points != self.config.spark_points
            || config.spark_seed != self.config.spark_seed
        {
            self.spark = spark_series(config.spark_points, config.spark_seed);
        }
        self.config = config;
    }
}
