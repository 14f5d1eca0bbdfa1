//! Object-URL lifecycle helpers
//!
//! Every fetched payload that is embedded directly (PDF, image, download
//! link) lives behind a transient object URL. Allocation happens here;
//! release is driven by the pane controller, which reports which URLs a
//! state transition orphaned.

use wasm_bindgen::JsValue;

/// Wrap bytes into a Blob and allocate an object URL for it.
pub fn create(bytes: &[u8], mime: Option<&str>) -> Result<String, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).into());

    let options = web_sys::BlobPropertyBag::new();
    if let Some(mime) = mime {
        options.set_type(mime);
    }

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(describe)?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(describe)
}

/// Release a single object URL.
pub fn revoke(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::warn!(url, error = ?e, "failed to revoke object url");
    }
}

/// Release every URL a state transition orphaned.
pub fn revoke_all(urls: impl IntoIterator<Item = String>) {
    for url in urls {
        tracing::debug!(%url, "revoking object url");
        revoke(&url);
    }
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
