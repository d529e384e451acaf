//! REST API Wrappers
//!
//! Frontend bindings to the movie-list server, organized by domain.
//! Shared fetch plumbing lives here; the per-domain wrappers are thin
//! async functions returning typed results.

mod movies;
mod search;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use movies::*;
pub use search::*;

/// Failure of a single request/response cycle. Every error is handled at
/// the call site; nothing propagates past the initiating event handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    /// HTTP 400 from the add-movie endpoint.
    #[error("movie is already in your list")]
    Duplicate,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("browser window is not available")]
    NoWindow,
}

fn js_err(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

fn request(method: &str, url: &str, content_type: Option<&str>, body: Option<&str>) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);

    if let Some(content_type) = content_type {
        let headers = Headers::new().map_err(js_err)?;
        headers.set("Content-Type", content_type).map_err(js_err)?;
        opts.set_headers(headers.as_ref());
    }
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    Request::new_with_str_and_init(url, &opts).map_err(js_err)
}

fn get_json(url: &str) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let headers = Headers::new().map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;
    opts.set_headers(headers.as_ref());
    Request::new_with_str_and_init(url, &opts).map_err(js_err)
}

fn post_json(url: &str, body: &str) -> Result<Request, ApiError> {
    request("POST", url, Some("application/json"), Some(body))
}

fn post_form(url: &str, body: &str) -> Result<Request, ApiError> {
    request("POST", url, Some("application/x-www-form-urlencoded"), Some(body))
}

fn post_empty(url: &str) -> Result<Request, ApiError> {
    request("POST", url, None, None)
}

fn delete(url: &str) -> Result<Request, ApiError> {
    request("DELETE", url, None, None)
}

/// Drive the fetch promise to completion.
async fn send(req: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let resp = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_err)?;
    resp.dyn_into::<Response>()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".to_string()))
}

/// Decode a JSON response body into a typed value.
async fn json_body<T: DeserializeOwned>(resp: &Response) -> Result<T, ApiError> {
    let promise: js_sys::Promise = resp.json().map_err(js_err)?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(400));
        assert!(!is_success(500));
    }

    #[test]
    fn duplicate_error_message_matches_alert_text() {
        assert_eq!(ApiError::Duplicate.to_string(), "movie is already in your list");
    }
}
