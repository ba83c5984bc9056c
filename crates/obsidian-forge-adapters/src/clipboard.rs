//! Platform clipboard backends for [`ClipboardService`].
//!
//! Natively the system clipboard (arboard) is the only path; there is no DOM,
//! so the fallback surface reports itself unavailable. In the browser the
//! async `navigator.clipboard` API is used in secure contexts, and an
//! off-screen `<textarea>` with `document.execCommand("copy")` otherwise.

use obsidian_forge_core::{ClipboardError, ClipboardService, FallbackSurface, PrimaryClipboard};

pub type PlatformClipboard = ClipboardService<SystemClipboard, SystemSurface>;

pub fn default_clipboard() -> PlatformClipboard {
    ClipboardService::new(SystemClipboard, SystemSurface)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSurface;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    impl PrimaryClipboard for SystemClipboard {
        fn is_available(&self) -> bool {
            true
        }

        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Rejected(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Rejected(e.to_string()))
        }
    }

    impl FallbackSurface for SystemSurface {
        type Element = ();

        fn create_scratch(&self) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }

        fn fill_and_select(&self, _element: &(), _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }

        fn exec_copy(&self) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }

        fn remove_scratch(&self, _element: ()) {}
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, HtmlTextAreaElement};

    use super::*;

    const SCRATCH_STYLE: &str = "position:fixed;left:-999999px;top:-999999px;opacity:0";

    fn js_err(err: wasm_bindgen::JsValue) -> ClipboardError {
        ClipboardError::Rejected(format!("{err:?}"))
    }

    fn document() -> Result<web_sys::Document, ClipboardError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ClipboardError::Unavailable)
    }

    impl PrimaryClipboard for SystemClipboard {
        fn is_available(&self) -> bool {
            web_sys::window().is_some_and(|w| w.is_secure_context())
        }

        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(js_err)
        }
    }

    impl FallbackSurface for SystemSurface {
        type Element = HtmlTextAreaElement;

        fn create_scratch(&self) -> Result<HtmlTextAreaElement, ClipboardError> {
            let document = document()?;
            let body = document.body().ok_or(ClipboardError::Unavailable)?;
            let textarea: HtmlTextAreaElement = document
                .create_element("textarea")
                .map_err(js_err)?
                .dyn_into()
                .map_err(|_| ClipboardError::Unavailable)?;
            textarea.set_attribute("style", SCRATCH_STYLE).map_err(js_err)?;
            textarea.set_attribute("readonly", "").map_err(js_err)?;
            body.append_child(&textarea).map_err(js_err)?;
            Ok(textarea)
        }

        fn fill_and_select(
            &self,
            element: &HtmlTextAreaElement,
            text: &str,
        ) -> Result<(), ClipboardError> {
            element.set_value(text);
            element.focus().map_err(js_err)?;
            element.select();
            Ok(())
        }

        fn exec_copy(&self) -> Result<(), ClipboardError> {
            let document: HtmlDocument = document()?
                .dyn_into()
                .map_err(|_| ClipboardError::Unavailable)?;
            match document.exec_command("copy").map_err(js_err)? {
                true => Ok(()),
                false => Err(ClipboardError::Rejected("execCommand returned false".to_owned())),
            }
        }

        fn remove_scratch(&self, element: HtmlTextAreaElement) {
            element.remove();
        }
    }
}
