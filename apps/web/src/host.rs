//! Services the widget borrows from its host: page location, timers and the
//! clipboard. The browser build talks to the page through web-sys; native
//! builds use the configured page URL and tokio timers.

use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ClipboardError {}

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::{ClipboardError, Duration};
    use flickfind_core::{Url, WidgetConfig};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    pub fn page_location(_config: &WidgetConfig) -> Option<Url> {
        let href = web_sys::window()?.location().href().ok()?;
        Url::parse(&href).ok()
    }

    pub async fn sleep(duration: Duration) {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        let _ = JsFuture::from(promise).await;
    }

    pub async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or_else(|| ClipboardError("no window".into()))?;
        let navigator = window.navigator();
        // Absent outside secure contexts.
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| ClipboardError(format!("{e:?}")))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError("clipboard API unavailable".into()));
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError(format!("{e:?}")))
    }

    /// Copy through a transient offscreen textarea and `execCommand("copy")`.
    pub fn fallback_copy(text: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(body) = document.body() else {
            return false;
        };
        let Ok(area) = document
            .create_element("textarea")
            .map(|el| el.unchecked_into::<web_sys::HtmlTextAreaElement>())
        else {
            return false;
        };
        area.set_value(text);
        let _ = area.set_attribute("readonly", "");
        let _ = area.set_attribute("style", "position:fixed;left:-9999px;top:0;opacity:0");
        if body.append_child(&area).is_err() {
            return false;
        }
        area.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .and_then(|d| d.exec_command("copy").ok())
            .unwrap_or(false);
        area.remove();
        copied
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::{ClipboardError, Duration};
    use flickfind_core::{Url, WidgetConfig};
    use tracing::info;

    pub fn page_location(config: &WidgetConfig) -> Option<Url> {
        Url::parse(&config.page_url).ok()
    }

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn write_clipboard(_text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("no system clipboard in the native shell".into()))
    }

    /// No offscreen element to copy from outside the browser; the link goes
    /// to the log instead.
    pub fn fallback_copy(text: &str) -> bool {
        info!(link = text, "Share link");
        true
    }
}

pub use imp::{fallback_copy, page_location, sleep, write_clipboard};
