//! Search Form Component
//!
//! Free-text movie search against the server's search endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::SearchResult;

/// Search form. Submitting clears any prior results, runs the search with
/// the server-issued CSRF token, and publishes the results plus the term
/// used (for the results heading). Failures are logged to the console only.
#[component]
pub fn SearchForm(
    set_results: WriteSignal<Vec<SearchResult>>,
    set_searched_term: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (search_term, set_search_term) = signal(String::new());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term = search_term.get();
        if term.is_empty() {
            return;
        }
        let token = ctx.csrf_token.get();

        // Clear prior results before the round-trip
        set_searched_term.set(None);
        set_results.set(Vec::new());

        spawn_local(async move {
            match api::search_movies(&token, &term).await {
                Ok(results) => {
                    set_results.set(results);
                    set_searched_term.set(Some(term));
                    set_search_term.set(String::new());
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("search error: {e}").into());
                }
            }
        });
    };

    view! {
        <form id="movieSearchForm" class="ml__search-form" on:submit=on_search>
            <input
                id="search_term"
                type="text"
                placeholder="Search for a movie..."
                prop:value=move || search_term.get()
                on:input=move |ev| set_search_term.set(event_target_value(&ev))
            />
            <button id="submitButton" type="submit">"Search"</button>
        </form>
    }
}
