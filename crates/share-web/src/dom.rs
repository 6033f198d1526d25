//! Attach the share tooltip to existing markup, found by element id.
//! For pages not rendered by the Leptos app.

use std::rc::Rc;

use share_tooltip::{ElementIds, ShareError, ShareTooltipConfig, ShareTooltipController, Tooltip};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::browser::{self, BrowserClipboard};
use crate::components::activate;

/// Tooltip backed by a DOM element's `textContent`.
pub struct DomTooltip(pub web_sys::Element);

impl Tooltip for DomTooltip {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Find the tooltip and share control by id and wire up click/mouseout.
///
/// Tooltip strings come from the tooltip's `data-prompt`/`data-confirmation`
/// attributes, then the config embedded in the page, then the defaults.
#[wasm_bindgen(js_name = attachShareTooltip)]
pub fn attach_share_tooltip(tooltip_id: String, share_id: String) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("share tooltip: no document"))?;

    let tooltip = document.get_element_by_id(&tooltip_id);
    let share = document.get_element_by_id(&share_id);

    let embedded = browser::embedded_config().unwrap_or_default();
    let text = match &tooltip {
        Some(el) => browser::text_from_attributes(
            el.get_attribute(browser::PROMPT_ATTR),
            el.get_attribute(browser::CONFIRMATION_ATTR),
            embedded.text,
        ),
        None => embedded.text,
    };
    let config = ShareTooltipConfig {
        text,
        elements: ElementIds { tooltip_id, share_id },
    };
    let tooltip = tooltip.map(DomTooltip);

    let controller =
        ShareTooltipController::initialize(&config, tooltip, share, BrowserClipboard).map_err(share_error_to_js)?;
    let controller = Rc::new(controller);
    let share = controller.share_control().clone();

    let on_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let controller = Rc::clone(&controller);
            wasm_bindgen_futures::spawn_local(async move {
                activate(&controller, browser::page_address()).await;
            });
        })
    };
    let on_leave = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| controller.on_pointer_leave())
    };

    share.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    share.add_event_listener_with_callback("mouseout", on_leave.as_ref().unchecked_ref())?;

    // Listeners live as long as the page.
    on_click.forget();
    on_leave.forget();
    Ok(())
}

fn share_error_to_js(e: ShareError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
