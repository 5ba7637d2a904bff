//! Browser Platform
//!
//! `Platform` backed by the browser window, document and navigator.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use gloo_utils::{document, window};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use super::Platform;
use crate::error::PlatformError;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

/// Best-effort text for a thrown JS value
fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn dom_error(value: JsValue) -> PlatformError {
    PlatformError::Dom(js_error_text(&value))
}

/// Starts `navigator.clipboard.writeText(text)`, looked up dynamically since
/// the API is missing on insecure origins and older browsers
fn clipboard_write_promise(text: &str) -> Result<Promise, PlatformError> {
    let navigator: JsValue = window().navigator().into();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| PlatformError::ClipboardUnavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(PlatformError::ClipboardUnavailable);
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(PlatformError::ClipboardUnavailable)?;

    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| PlatformError::ClipboardWrite(js_error_text(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| PlatformError::ClipboardWrite("writeText did not return a promise".into()))
}

impl Platform for BrowserPlatform {
    fn cookie_string(&self) -> String {
        document()
            .dyn_into::<HtmlDocument>()
            .ok()
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }

    fn origin(&self) -> String {
        window().location().origin().unwrap_or_default()
    }

    fn pathname(&self) -> String {
        window().location().pathname().unwrap_or_default()
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = window().location().set_href(url) {
            log::error!("[Platform] Navigation to {} failed: {}", url, js_error_text(&e));
        }
    }

    fn open_in_new_tab(&self, url: &str) {
        if let Err(e) = window().open_with_url_and_target(url, "_blank") {
            log::error!("[Platform] Opening {} failed: {}", url, js_error_text(&e));
        }
    }

    fn alert(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PlatformError>> {
        let promise = clipboard_write_promise(text);
        async move {
            JsFuture::from(promise?)
                .await
                .map(|_| ())
                .map_err(|e| PlatformError::ClipboardWrite(js_error_text(&e)))
        }
        .boxed_local()
    }

    fn copy_with_textarea(&self, text: &str) -> Result<(), PlatformError> {
        let document = document();
        let body = gloo_utils::body();

        let textarea = document
            .create_element("textarea")
            .map_err(dom_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| PlatformError::Dom("textarea cast failed".into()))?;
        textarea.set_value(text);
        // Off-screen so the page doesn't jump
        let style = textarea.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-999999px");

        body.append_child(&textarea).map_err(dom_error)?;
        let _ = textarea.focus();
        textarea.select();

        let copied = document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| PlatformError::Dom("not an HTML document".into()))
            .and_then(|html| {
                html.exec_command("copy")
                    .map_err(|e| PlatformError::ClipboardWrite(js_error_text(&e)))
            });
        let _ = body.remove_child(&textarea);

        match copied? {
            true => Ok(()),
            false => Err(PlatformError::ClipboardWrite("execCommand(\"copy\") was rejected".into())),
        }
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
