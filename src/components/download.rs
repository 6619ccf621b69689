/// Trigger a browser download of a JSON string.
/// Only does anything in the hydrated client; on the server it is a no-op.
#[allow(unused_variables)]
pub fn download_json(filename: &str, contents: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(contents));
        let options = BlobPropertyBag::new();
        options.set_type("application/json");

        let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = Url::revoke_object_url(&url);
    }
}
