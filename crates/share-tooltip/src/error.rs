use std::fmt;

use thiserror::Error;

/// Which of the two page elements the controller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Tooltip,
    ShareControl,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Tooltip => f.write_str("tooltip"),
            Element::ShareControl => f.write_str("share control"),
        }
    }
}

/// The clipboard refused the write (permission denied, unsupported environment, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardWriteError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("{element} element not found (id \"{id}\")")]
    ElementNotFound { element: Element, id: String },

    #[error(transparent)]
    ClipboardWrite(#[from] ClipboardWriteError),

    #[error("invalid share tooltip config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShareError>;
