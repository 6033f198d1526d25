use std::rc::Rc;

use leptos::prelude::*;
use share_tooltip::{Clipboard, ShareTooltipConfig, ShareTooltipController, Tooltip};

use crate::browser::{self, BrowserClipboard};

/// Tooltip backed by a reactive signal.
#[derive(Clone, Copy)]
pub struct SignalTooltip(pub RwSignal<String>);

impl Tooltip for SignalTooltip {
    fn set_text(&self, text: &str) {
        self.0.set(text.to_string());
    }
}

/// Copy `page_address` and report failures to the console.
/// Errors stay here so the rest of the page keeps working.
pub async fn activate<T: Tooltip, S, C: Clipboard>(
    controller: &ShareTooltipController<T, S, C>,
    page_address: Option<String>,
) {
    let Some(address) = page_address else {
        leptos::logging::warn!("share: page address unavailable");
        return;
    };
    if let Err(e) = controller.on_activate(&address).await {
        leptos::logging::warn!("share: {}", e);
    }
}

/// Share control with a tooltip that confirms once the link is copied.
///
/// Reads [`ShareTooltipConfig`] from context, falling back to the defaults.
#[component]
pub fn ShareTooltip(
    /// Label on the share control
    #[prop(into, default = "share".to_string())]
    label: String,
) -> impl IntoView {
    let config = use_context::<ShareTooltipConfig>().unwrap_or_default();
    let text = RwSignal::new(String::new());

    let controller = config.validate().and_then(|()| {
        ShareTooltipController::initialize(&config, Some(SignalTooltip(text)), Some(()), BrowserClipboard)
    });
    let controller = match controller {
        Ok(c) => c,
        Err(e) => {
            leptos::logging::error!("share tooltip disabled: {}", e);
            return view! { <span class="share-disabled">{label}</span> }.into_any();
        }
    };
    let controller = StoredValue::new_local(Rc::new(controller));

    let on_click = move |_| {
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            activate(&controller, browser::page_address()).await;
        });
    };
    let on_leave = move |_| controller.with_value(|c| c.on_pointer_leave());

    let ids = config.elements;
    // Attribute names match browser::PROMPT_ATTR / CONFIRMATION_ATTR.
    view! {
        <span class="share-tooltip">
            <button id=ids.share_id type="button" class="share-control" on:click=on_click on:mouseout=on_leave>
                {label}
            </button>
            <span
                id=ids.tooltip_id
                class="tooltip-text"
                data-prompt=config.text.prompt
                data-confirmation=config.text.confirmation
            >
                {move || text.get()}
            </span>
        </span>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use share_tooltip::{ClipboardWriteError, TooltipState};
    use std::cell::RefCell;

    #[derive(Default)]
    struct TextNode(RefCell<String>);

    impl Tooltip for TextNode {
        fn set_text(&self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        async fn write_text(&self, _text: &str) -> std::result::Result<(), ClipboardWriteError> {
            Err(ClipboardWriteError("NotAllowedError: Write permission denied.".into()))
        }
    }

    fn controller(tooltip: &TextNode) -> ShareTooltipController<&TextNode, (), DeniedClipboard> {
        ShareTooltipController::initialize(&ShareTooltipConfig::default(), Some(tooltip), Some(()), DeniedClipboard)
            .unwrap()
    }

    #[test]
    fn denied_write_is_logged_not_raised() {
        let tooltip = TextNode::default();
        let c = controller(&tooltip);

        block_on(activate(&c, Some("https://example.com/post/5".into())));

        assert_eq!(c.state(), TooltipState::Prompt);
        assert_eq!(*tooltip.0.borrow(), "Copy link to clipboard");
    }

    #[test]
    fn missing_address_skips_the_write() {
        let tooltip = TextNode::default();
        let c = controller(&tooltip);

        block_on(activate(&c, None));

        assert_eq!(*tooltip.0.borrow(), "Copy link to clipboard");
    }
}
