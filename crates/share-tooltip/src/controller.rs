use std::cell::Cell;

use crate::clipboard::Clipboard;
use crate::config::ShareTooltipConfig;
use crate::error::{Element, Result, ShareError};
use crate::tooltip::{Tooltip, TooltipState, TooltipText};

/// Drives a tooltip's text from share-control interactions.
///
/// Handlers take `&self` so one controller can be shared between event
/// callbacks on a single-threaded UI loop. `S` is the share control; the
/// controller never touches it, the host binds events on it.
pub struct ShareTooltipController<T, S, C> {
    text: TooltipText,
    tooltip: T,
    share_control: S,
    clipboard: C,
    state: Cell<TooltipState>,
}

impl<T: Tooltip, S, C: Clipboard> ShareTooltipController<T, S, C> {
    /// Takes the looked-up elements and shows the prompt.
    ///
    /// `None` for either element means the page didn't provide it; the id it
    /// was looked up by comes from `config.elements`. Text is taken as given,
    /// validation belongs to whoever loaded the config.
    pub fn initialize(
        config: &ShareTooltipConfig,
        tooltip: Option<T>,
        share_control: Option<S>,
        clipboard: C,
    ) -> Result<Self> {
        let tooltip = tooltip.ok_or_else(|| ShareError::ElementNotFound {
            element: Element::Tooltip,
            id: config.elements.tooltip_id.clone(),
        })?;
        let share_control = share_control.ok_or_else(|| ShareError::ElementNotFound {
            element: Element::ShareControl,
            id: config.elements.share_id.clone(),
        })?;

        let controller = Self {
            text: config.text.clone(),
            tooltip,
            share_control,
            clipboard,
            state: Cell::new(TooltipState::Prompt),
        };
        controller.show(TooltipState::Prompt);
        Ok(controller)
    }

    /// Copy `page_address` to the clipboard, then confirm.
    ///
    /// A failed write leaves the tooltip as it was. There is no cancellation:
    /// if the pointer leaves while the write is pending, the confirmation is
    /// still shown once the write completes.
    pub async fn on_activate(&self, page_address: &str) -> Result<()> {
        match self.clipboard.write_text(page_address).await {
            Ok(()) => {
                self.show(TooltipState::Confirmation);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "share link not copied");
                Err(e.into())
            }
        }
    }

    pub fn on_pointer_leave(&self) {
        self.show(TooltipState::Prompt);
    }

    pub fn state(&self) -> TooltipState {
        self.state.get()
    }

    pub fn tooltip(&self) -> &T {
        &self.tooltip
    }

    pub fn share_control(&self) -> &S {
        &self.share_control
    }

    fn show(&self, state: TooltipState) {
        tracing::debug!(?state, "tooltip");
        self.state.set(state);
        self.tooltip.set_text(self.text.text_for(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardWriteError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeTooltip(RefCell<String>);

    impl Tooltip for FakeTooltip {
        fn set_text(&self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    /// Fails every write until `allow` is flipped.
    #[derive(Default)]
    struct FlakyClipboard {
        allow: Cell<bool>,
        contents: RefCell<Option<String>>,
    }

    impl Clipboard for FlakyClipboard {
        async fn write_text(&self, text: &str) -> std::result::Result<(), ClipboardWriteError> {
            if !self.allow.get() {
                return Err(ClipboardWriteError("NotAllowedError".into()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    fn controller(clipboard: &FlakyClipboard) -> ShareTooltipController<FakeTooltip, (), &FlakyClipboard> {
        ShareTooltipController::initialize(
            &ShareTooltipConfig::default(),
            Some(FakeTooltip::default()),
            Some(()),
            clipboard,
        )
        .unwrap()
    }

    fn shown(c: &ShareTooltipController<FakeTooltip, (), &FlakyClipboard>) -> String {
        c.tooltip().0.borrow().clone()
    }

    #[test]
    fn missing_tooltip_is_reported_with_its_id() {
        let clipboard = FlakyClipboard::default();
        let err = ShareTooltipController::<FakeTooltip, (), _>::initialize(
            &ShareTooltipConfig::default(),
            None,
            Some(()),
            &clipboard,
        )
        .err()
        .unwrap();
        assert_eq!(
            err,
            ShareError::ElementNotFound {
                element: Element::Tooltip,
                id: "tooltip".into()
            }
        );
        assert_eq!(err.to_string(), "tooltip element not found (id \"tooltip\")");
    }

    #[test]
    fn missing_share_control_is_reported() {
        let clipboard = FlakyClipboard::default();
        let err = ShareTooltipController::<_, (), _>::initialize(
            &ShareTooltipConfig::default(),
            Some(FakeTooltip::default()),
            None,
            &clipboard,
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            ShareError::ElementNotFound {
                element: Element::ShareControl,
                ..
            }
        ));
    }

    #[test]
    fn missing_element_with_empty_id_is_still_not_found() {
        let clipboard = FlakyClipboard::default();
        let mut config = ShareTooltipConfig::default();
        config.elements.share_id = String::new();

        let err =
            ShareTooltipController::<_, (), _>::initialize(&config, Some(FakeTooltip::default()), None, &clipboard)
                .err()
                .unwrap();
        assert_eq!(
            err,
            ShareError::ElementNotFound {
                element: Element::ShareControl,
                id: String::new()
            }
        );
    }

    #[test]
    fn identical_texts_do_not_block_initialize() {
        let clipboard = FlakyClipboard::default();
        let config = ShareTooltipConfig {
            text: TooltipText::new("Share", "Share"),
            ..Default::default()
        };
        let c =
            ShareTooltipController::initialize(&config, Some(FakeTooltip::default()), Some(()), &clipboard).unwrap();
        assert_eq!(shown(&c), "Share");
        assert_eq!(c.state(), TooltipState::Prompt);
    }

    #[test]
    fn retry_after_failure_succeeds() {
        let clipboard = FlakyClipboard::default();
        let c = controller(&clipboard);

        assert!(block_on(c.on_activate("https://example.com/game/1")).is_err());
        assert_eq!(c.state(), TooltipState::Prompt);
        assert!(clipboard.contents.borrow().is_none());

        clipboard.allow.set(true);
        block_on(c.on_activate("https://example.com/game/1")).unwrap();
        assert_eq!(c.state(), TooltipState::Confirmation);
        assert_eq!(shown(&c), "Copied link to clipboard");
    }

    #[test]
    fn failure_after_confirmation_keeps_confirmation() {
        let clipboard = FlakyClipboard::default();
        clipboard.allow.set(true);
        let c = controller(&clipboard);
        block_on(c.on_activate("https://example.com/")).unwrap();

        clipboard.allow.set(false);
        assert!(block_on(c.on_activate("https://example.com/")).is_err());
        assert_eq!(shown(&c), "Copied link to clipboard");
    }

    #[test]
    fn every_sequence_shows_one_of_two_texts() {
        let clipboard = FlakyClipboard::default();
        let c = controller(&clipboard);
        let allowed = ["Copy link to clipboard", "Copied link to clipboard"];

        // activate-ok, activate-fail, leave
        for step in [0, 1, 2, 0, 0, 2, 1, 2, 2, 0, 1, 1] {
            match step {
                0 => {
                    clipboard.allow.set(true);
                    let _ = block_on(c.on_activate("https://example.com/"));
                }
                1 => {
                    clipboard.allow.set(false);
                    let _ = block_on(c.on_activate("https://example.com/"));
                }
                _ => c.on_pointer_leave(),
            }
            let text = shown(&c);
            assert!(allowed.contains(&text.as_str()), "unexpected tooltip text {text:?}");
            assert_eq!(text, c.text.text_for(c.state()));
        }
    }
}
