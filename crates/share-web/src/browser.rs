//! Browser collaborators for the share tooltip.
//! Real Web APIs under `hydrate`; inert stand-ins while rendering on the server.

use share_tooltip::{Clipboard, ClipboardWriteError, ShareTooltipConfig, TooltipText};

/// Id of the `<script type="application/json">` block carrying the widget config.
pub const CONFIG_SCRIPT_ID: &str = "share-tooltip-config";

/// Attributes on the tooltip element carrying its two strings.
pub const PROMPT_ATTR: &str = "data-prompt";
pub const CONFIRMATION_ATTR: &str = "data-confirmation";

/// Tooltip strings from element attributes, each falling back independently.
pub fn text_from_attributes(
    prompt: Option<String>,
    confirmation: Option<String>,
    fallback: TooltipText,
) -> TooltipText {
    let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
    TooltipText {
        prompt: non_empty(prompt).unwrap_or(fallback.prompt),
        confirmation: non_empty(confirmation).unwrap_or(fallback.confirmation),
    }
}

/// `navigator.clipboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

/// Serialize config for embedding in a `<script>` block.
/// `<` is escaped so a `</script>` inside a string can't close the block.
pub fn config_json(config: &ShareTooltipConfig) -> String {
    serde_json::to_string(config)
        .unwrap_or_else(|_| "{}".to_string())
        .replace('<', "\\u003c")
}

#[cfg(feature = "hydrate")]
mod client {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    impl Clipboard for BrowserClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError> {
            let window = web_sys::window().ok_or_else(|| ClipboardWriteError("no window".into()))?;
            let promise = window.navigator().clipboard().write_text(text);
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardWriteError(js_error_message(&e)))
        }
    }

    pub fn js_error_message(value: &JsValue) -> String {
        value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value))
    }

    /// `window.location.href`
    pub fn page_address() -> Option<String> {
        web_sys::window()?.location().href().ok()
    }

    /// Config the server embedded in the page, if any.
    pub fn embedded_config() -> Option<ShareTooltipConfig> {
        let document = web_sys::window()?.document()?;
        let json = document.get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()?;
        serde_json::from_str(&json)
            .map_err(|e| leptos::logging::warn!("ignoring malformed share tooltip config: {}", e))
            .ok()
    }
}

#[cfg(not(feature = "hydrate"))]
mod client {
    use super::*;

    impl Clipboard for BrowserClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardWriteError> {
            Err(ClipboardWriteError("clipboard is only available in the browser".into()))
        }
    }

    pub fn page_address() -> Option<String> {
        None
    }

    pub fn embedded_config() -> Option<ShareTooltipConfig> {
        None
    }
}

pub use client::*;
