//! Widget configuration: tooltip strings and the element ids the host page uses.
//!
//! Every field is optional in TOML and falls back to the stock copy:
//!
//! ```toml
//! [text]
//! prompt = "Copy link to clipboard"
//! confirmation = "Copied link to clipboard"
//!
//! [elements]
//! tooltip_id = "tooltip"
//! share_id = "share"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ShareError;
use crate::tooltip::TooltipText;

pub const DEFAULT_TOOLTIP_ID: &str = "tooltip";
pub const DEFAULT_SHARE_ID: &str = "share";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElementIds {
    pub tooltip_id: String,
    pub share_id: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            tooltip_id: DEFAULT_TOOLTIP_ID.to_string(),
            share_id: DEFAULT_SHARE_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShareTooltipConfig {
    pub text: TooltipText,
    pub elements: ElementIds,
}

impl ShareTooltipConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse share tooltip config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no share tooltip config, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Both strings must be non-empty and distinct, otherwise the toggle is invisible.
    pub fn validate(&self) -> Result<(), ShareError> {
        let text = &self.text;
        if text.prompt.trim().is_empty() {
            return Err(ShareError::InvalidConfig("prompt text is empty".into()));
        }
        if text.confirmation.trim().is_empty() {
            return Err(ShareError::InvalidConfig("confirmation text is empty".into()));
        }
        if text.prompt == text.confirmation {
            return Err(ShareError::InvalidConfig("prompt and confirmation text are identical".into()));
        }
        if self.elements.tooltip_id.is_empty() || self.elements.share_id.is_empty() {
            return Err(ShareError::InvalidConfig("element ids must not be empty".into()));
        }
        Ok(())
    }
}
