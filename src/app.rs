//! Movie-List Frontend App
//!
//! Root component: reads the host-page inputs once, wires up context and
//! store, and lays out search plus the saved list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{MovieList, SearchForm, SearchResults};
use crate::context::{self, AppContext};
use crate::models::SearchResult;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Host-page inputs, read once at mount and injected from here on
    let (csrf_token, _) = signal(context::csrf_token_from_document().unwrap_or_default());
    let (favorites_only, _) = signal(context::favorites_filter_from_location());

    // State
    let (search_results, set_search_results) = signal(Vec::<SearchResult>::new());
    let (searched_term, set_searched_term) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        csrf_token,
        favorites_only,
        (reload_trigger, set_reload_trigger),
    ));

    // Load the saved list on mount and whenever the trigger bumps
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let favorites = favorites_only.get();
        spawn_local(async move {
            match api::list_movies(favorites).await {
                Ok(movies) => {
                    *store.movies().write() = movies;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to load movie list: {e}").into());
                }
            }
        });
    });

    view! {
        <main id="mainContent" class="ml__main">
            // Search: form plus rendered results
            <section class="ml__search">
                <SearchForm set_results=set_search_results set_searched_term=set_searched_term />
                <SearchResults results=search_results searched_term=searched_term />
            </section>

            // The user's saved list
            <section class="ml__my-list-section">
                <h2>"My Movie List"</h2>
                <MovieList />
            </section>
        </main>
    }
}
