//! HTTP API client.
//!
//! Wraps `fetch` for JSON requests against the same-origin backend. The
//! discovery path needs the transport-level ok flag *and* the raw body so
//! the core can classify the response, so `request_raw` returns both
//! instead of failing on non-2xx statuses.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::dom;

/// Perform a fetch request, returning `(http_ok, body_text)`.
///
/// `Err` means the transport itself failed (no response to classify).
pub async fn request_raw(
    path: &str,
    method: &str,
    body: Option<String>,
) -> Result<(bool, String), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;

    if let Some(ref b) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
        let js_body = JsValue::from_str(b);
        opts.set_body(&js_body);
    }

    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(path, &opts).map_err(|e| format!("{:?}", e))?;

    let window = dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    Ok((resp.ok(), text.as_string().unwrap_or_default()))
}

/// Fetch the capability snapshot; any failure is reported as `Err` and the
/// caller keeps its fallback table.
pub async fn fetch_capabilities() -> Result<String, String> {
    let (ok, body) = request_raw("/api/capabilities", "GET", None).await?;
    if !ok {
        return Err(format!("capability endpoint returned an error: {}", body));
    }
    Ok(body)
}
