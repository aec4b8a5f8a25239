//! Utility functions for the upload wizard: toast feedback, multipart form
//! construction and thumbnail encoding.

use base64::{engine::general_purpose, Engine as _};
use common::wizard::Part;
use web_sys::HtmlElement;

use super::webfile::WebFile;

/// Base path of the external REST API.
pub const API_BASE: &str = "/api";

/// Displays a temporary notification at the top of the screen.
///
/// Injects a styled `div` into the DOM for non-blocking feedback (tag added,
/// image rejected, project published) and removes it after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("top", "16px").ok();
            style.set_property("right", "16px").ok();
            style.set_property("background", "#323232").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "12px 18px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-family", "Arial, sans-serif").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

/// Builds the browser `FormData` from the assembled parts. Returns `None`
/// only when the DOM refuses a field, which is surfaced as a failed submit.
pub fn form_data_from_parts(parts: &[Part<WebFile>]) -> Option<web_sys::FormData> {
    let form = web_sys::FormData::new().ok()?;
    for part in parts {
        match part {
            Part::Text { name, value } => form.append_with_str(name, value).ok()?,
            Part::File { name, file } => form
                .append_with_blob_and_filename(name, &file.0, &file.0.name())
                .ok()?,
        }
    }
    Some(form)
}

/// Encodes raw image bytes as a base64 data URL for the thumbnail preview.
pub fn data_url_from_bytes(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "image/*" } else { mime };
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    )
}

use wasm_bindgen::JsCast;
