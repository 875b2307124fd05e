//! Data models for the HUD
//!
//! This module contains the state types behind the widgets:
//! - Chat transcript and composer for the assistant mockup
//! - The voice/chat pager
//! - Enums for navigation

pub mod chat;
pub mod enums;
pub mod pager;

// Re-exports for convenient access
pub use chat::{ChatLog, STUB_REPLY};
pub use enums::{AssistantPage, Sender, Tab};
pub use pager::Pager;
