//! Browser-side file download for CSV text produced in the page.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

fn js_error(context: &str, err: wasm_bindgen::JsValue) -> String {
    format!("{}: {:?}", context, err)
}

/// Offer `content` to the user as a download named `filename`.
///
/// A temporary anchor is attached to the document, clicked, and removed again;
/// the object URL is revoked whether or not the click succeeded.
pub fn download_csv(content: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let document = window.document().ok_or("No document available")?;
    let body = document.body().ok_or("Document has no body")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Failed to create blob", e))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_error("Failed to create object URL", e))?;

    let clicked = (|| -> Result<(), String> {
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| js_error("Failed to create link", e))?
            .dyn_into()
            .map_err(|_| "Created element is not an anchor".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        body.append_child(&anchor).map_err(|e| js_error("Failed to attach link", e))?;
        anchor.click();
        body.remove_child(&anchor).map_err(|e| js_error("Failed to detach link", e))?;
        Ok(())
    })();

    let revoked = Url::revoke_object_url(&url).map_err(|e| js_error("Failed to revoke object URL", e));
    clicked.and(revoked)
}
