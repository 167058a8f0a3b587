use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlImageElement, Url};

/// Wrap raw image bytes in a blob and hand back a displayable object URL
pub fn object_url_from_bytes(bytes: &[u8], mime_type: &str) -> Result<String, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("failed to create blob: {e:?}"))?;
    Url::create_object_url_with_blob(&blob).map_err(|e| format!("failed to create url: {e:?}"))
}

/// Object URL for an existing blob (e.g. a picked file)
pub fn object_url_from_blob(blob: &Blob) -> Result<String, String> {
    Url::create_object_url_with_blob(blob).map_err(|e| format!("failed to create url: {e:?}"))
}

/// Release an object URL that is no longer displayed
pub fn revoke_object_url(url: &str) {
    Url::revoke_object_url(url).ok();
}

/// Decode an image URL into an element, resolving once the browser has
/// loaded it and its dimensions are known.
pub async fn load_bitmap(url: &str) -> Result<HtmlImageElement, String> {
    let image =
        HtmlImageElement::new().map_err(|e| format!("failed to create image element: {e:?}"))?;

    let target = image.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            resolve.call0(&JsValue::NULL).ok();
        });
        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            reject
                .call1(&JsValue::NULL, &JsValue::from_str("image failed to decode"))
                .ok();
        });
        target.set_onload(Some(onload.unchecked_ref()));
        target.set_onerror(Some(onerror.unchecked_ref()));
    });

    image.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|e| format!("image decode failed: {e:?}"))?;

    Ok(image)
}
