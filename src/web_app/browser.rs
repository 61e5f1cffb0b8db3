// web_app/browser.rs - Browser APIs used by the pages
//
// Files, object URLs, the clipboard and confirm(). Only called from event
// handlers, so native builds compile these but never reach them.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

use crate::web_app::forms::PendingImage;
use crate::web_app::model::ImageUpload;

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// First file of the `<input type="file">` that fired `ev`
pub fn selected_file(ev: &Event) -> Option<File> {
    let input = event_target::<HtmlInputElement>(ev);
    let file = input.files().and_then(|files| files.get(0));
    // Allow choosing the same file again after removing it
    input.set_value("");
    file
}

/// Read `file` into memory and create its preview URL
pub async fn read_image(file: File) -> Result<PendingImage, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(describe)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = web_sys::Url::create_object_url_with_blob(&file).map_err(describe)?;

    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    tracing::debug!("Read image {} ({} bytes)", file.name(), bytes.len());

    Ok(PendingImage {
        upload: ImageUpload {
            file_name: file.name(),
            content_type,
            bytes,
        },
        preview_url,
    })
}

/// Release an object URL created by `read_image`
pub fn revoke_preview(image: &PendingImage) {
    if let Err(err) = web_sys::Url::revoke_object_url(&image.preview_url) {
        tracing::warn!("Could not revoke preview URL: {}", describe(err));
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(describe)
}

/// Native confirm dialog; false when it cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
