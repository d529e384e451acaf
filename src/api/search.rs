//! Search Commands
//!
//! Frontend bindings for the movie search endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{is_success, json_body, post_form, send, ApiError};
use crate::models::SearchResult;

/// Bytes left bare by `application/x-www-form-urlencoded` encoding.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM).to_string().replace("%20", "+")
}

/// Body of the search request. The server validates the CSRF token before
/// running the search.
pub(crate) fn search_form_body(csrf_token: &str, search_term: &str) -> String {
    format!(
        "csrf_token={}&search_term={}",
        form_encode(csrf_token),
        form_encode(search_term)
    )
}

/// Search the external movie database through the server. Records already
/// saved by the user come back with their membership flag set.
pub async fn search_movies(csrf_token: &str, search_term: &str) -> Result<Vec<SearchResult>, ApiError> {
    let body = search_form_body(csrf_token, search_term);
    let resp = send(post_form("/movie-search", &body)?).await?;
    if !is_success(resp.status()) {
        return Err(ApiError::Status(resp.status()));
    }
    json_body(&resp).await
}
