use crate::ports::{Clipboard, ClipboardError, FallbackSurface, PrimaryClipboard};

/// Copies text through the platform clipboard, falling back to the legacy
/// scratch-element path when the platform API is missing or refuses.
#[derive(Debug, Clone)]
pub struct ClipboardService<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> ClipboardService<P, F>
where
    P: PrimaryClipboard,
    F: FallbackSurface,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    fn copy_via_fallback(&self, text: &str) -> Result<(), ClipboardError> {
        let scratch = ScratchElement::acquire(&self.fallback)?;
        scratch.fill_and_select(text)?;
        self.fallback.exec_copy()
    }
}

impl<P, F> Clipboard for ClipboardService<P, F>
where
    P: PrimaryClipboard,
    F: FallbackSurface,
{
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.primary.is_available() {
            match self.primary.write_text(text).await {
                Ok(()) => {
                    tracing::debug!(path = "primary", "copied to clipboard");
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(error = %err, "primary clipboard failed, trying fallback");
                }
            }
        }
        let result = self.copy_via_fallback(text);
        match &result {
            Ok(()) => tracing::debug!(path = "fallback", "copied to clipboard"),
            Err(err) => tracing::warn!(error = %err, "clipboard copy failed"),
        }
        result
    }
}

/// Scratch element owned for the duration of one fallback copy. Dropping the
/// guard removes the element, on success, error and unwind alike.
struct ScratchElement<'a, F: FallbackSurface> {
    surface: &'a F,
    element: Option<F::Element>,
}

impl<'a, F: FallbackSurface> ScratchElement<'a, F> {
    fn acquire(surface: &'a F) -> Result<Self, ClipboardError> {
        let element = surface.create_scratch()?;
        Ok(Self {
            surface,
            element: Some(element),
        })
    }

    fn fill_and_select(&self, text: &str) -> Result<(), ClipboardError> {
        match &self.element {
            Some(element) => self.surface.fill_and_select(element, text),
            None => Err(ClipboardError::Unavailable),
        }
    }
}

impl<F: FallbackSurface> Drop for ScratchElement<'_, F> {
    fn drop(&mut self) {
        if let Some(element) = self.element.take() {
            self.surface.remove_scratch(element);
        }
    }
}
