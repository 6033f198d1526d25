use crate::error::ClipboardWriteError;

/// Asynchronous system clipboard.
///
/// The returned future is not required to be `Send`: the browser clipboard
/// lives on a single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError> {
        (**self).write_text(text).await
    }
}
