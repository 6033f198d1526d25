//! Tooltip text and the element abstraction the controller writes to.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "Copy link to clipboard";
pub const DEFAULT_CONFIRMATION: &str = "Copied link to clipboard";

/// Which of the two fixed strings a tooltip is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Prompt,
    Confirmation,
}

/// The two strings a tooltip toggles between.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TooltipText {
    pub prompt: String,
    pub confirmation: String,
}

impl Default for TooltipText {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            confirmation: DEFAULT_CONFIRMATION.to_string(),
        }
    }
}

impl TooltipText {
    pub fn new(prompt: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            confirmation: confirmation.into(),
        }
    }

    pub fn text_for(&self, state: TooltipState) -> &str {
        match state {
            TooltipState::Prompt => &self.prompt,
            TooltipState::Confirmation => &self.confirmation,
        }
    }
}

/// An on-screen text element.
///
/// Takes `&self` like DOM elements and reactive signals do; implementations
/// hold their own interior mutability.
pub trait Tooltip {
    fn set_text(&self, text: &str);
}

impl<T: Tooltip + ?Sized> Tooltip for &T {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}

impl<T: Tooltip + ?Sized> Tooltip for std::rc::Rc<T> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}
