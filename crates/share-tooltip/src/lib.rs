//! Copy-the-page-link share control.
//!
//! [`ShareTooltipController`] writes the page address to a [`Clipboard`] when
//! the share control is activated and toggles a [`Tooltip`] between a prompt
//! and a confirmation. It has no DOM dependency; hosts supply the elements.

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod tooltip;

pub use clipboard::Clipboard;
pub use config::{ElementIds, ShareTooltipConfig};
pub use controller::ShareTooltipController;
pub use error::{ClipboardWriteError, Element, Result, ShareError};
pub use tooltip::{Tooltip, TooltipState, TooltipText};
