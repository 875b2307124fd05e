//! Enums used throughout the HUD
//!
//! This module contains the various enum types used for navigation
//! and UI rendering.

/// Top-level tab shown in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Explore,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Explore];

    pub fn toggle(&self) -> Self {
        match self {
            Tab::Home => Tab::Explore,
            Tab::Explore => Tab::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Explore => 1,
        }
    }
}

/// Page of the assistant slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistantPage {
    #[default]
    Voice, // Core ring + listening status
    Chat,  // Chat transcript + composer
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_toggle() {
        assert_eq!(Tab::Home.toggle(), Tab::Explore);
        assert_eq!(Tab::Explore.toggle(), Tab::Home);
    }

    #[test]
    fn test_tab_label_and_index() {
        assert_eq!(Tab::Home.label(), "Home");
        assert_eq!(Tab::Explore.label(), "Explore");
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Tab::default(), Tab::Home);
        assert_eq!(AssistantPage::default(), AssistantPage::Voice);
    }
}
