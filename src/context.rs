//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the two host-page
//! reads performed once at mount. The host page supplies a hidden
//! `#csrf_token` input and, on the favorites view, a `filter=favorites`
//! query parameter; components get both through context instead of
//! ambient DOM lookups.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Server-issued CSRF token, required by the search endpoint
    pub csrf_token: ReadSignal<String>,
    /// Whether the favorites-only filtered view is active
    pub favorites_only: ReadSignal<bool>,
    /// Trigger to reload the saved list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the saved list - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        csrf_token: ReadSignal<String>,
        favorites_only: ReadSignal<bool>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            csrf_token,
            favorites_only,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the saved list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Value of the hidden `#csrf_token` input rendered by the server.
pub fn csrf_token_from_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let input = document
        .get_element_by_id("csrf_token")?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    Some(input.value())
}

/// Whether the current page is the favorites-only filtered view.
pub fn favorites_filter_from_location() -> bool {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| query_has_favorites_filter(&search))
        .unwrap_or(false)
}

/// Check the query string for `filter=favorites`.
fn query_has_favorites_filter(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "filter=favorites")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_favorites_filter() {
        assert!(query_has_favorites_filter("?filter=favorites"));
        assert!(query_has_favorites_filter("filter=favorites"));
        assert!(query_has_favorites_filter("?sort=title&filter=favorites"));
        assert!(query_has_favorites_filter("?filter=favorites&order=asc"));
    }

    #[test]
    fn ignores_other_queries() {
        assert!(!query_has_favorites_filter(""));
        assert!(!query_has_favorites_filter("?"));
        assert!(!query_has_favorites_filter("?sort=title"));
        assert!(!query_has_favorites_filter("?filter=watched"));
        assert!(!query_has_favorites_filter("?myfilter=favorites"));
    }
}
