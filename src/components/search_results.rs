//! Search Results Component
//!
//! Renders the search heading and one entry per returned record. Records
//! already in the user's list show a static marker; the rest get an add
//! button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AddMovieArgs, ApiError};
use crate::context::AppContext;
use crate::models::SearchResult;

/// Results container. Empty until a search succeeds; a new search clears
/// it before the round-trip.
#[component]
pub fn SearchResults(
    results: ReadSignal<Vec<SearchResult>>,
    searched_term: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div id="searchResults">
            {move || searched_term.get().map(|term| view! {
                <h2>{format!("Search results for \"{term}\"")}</h2>
                <ul class="ml__search-results">
                    <For
                        each=move || results.get()
                        key=|result| result.imdb_id.clone()
                        children=move |result| view! { <SearchResultItem result=result /> }
                    />
                </ul>
            })}
        </div>
    }
}

/// One search result: poster, title, year, and either the in-list marker
/// or an add button, depending on the server's membership flag.
#[component]
fn SearchResultItem(result: SearchResult) -> impl IntoView {
    let in_list = result.in_list;
    let href = format!("/movie/{}", result.imdb_id);
    let poster = result.poster_src().to_string();
    let title = result.title.clone();
    let year = result.year.clone();

    view! {
        <li class="ml__search-result">
            <a href=href>
                <img class="ml__search-result--image" src=poster alt=title.clone() />
                <h3 class="ml__search-result--title">{title}</h3>
                <p class="ml__search-result--year">{year}</p>
            </a>
            {if in_list {
                view! {
                    <span class="ml__search-result--movie-in-list">"Already in My List"</span>
                }.into_any()
            } else {
                view! { <AddButton result=result /> }.into_any()
            }}
        </li>
    }
}

/// Add button for a search result. On success it becomes a confirmation
/// marker and the saved list is reloaded; a duplicate (HTTP 400) raises an
/// alert and leaves the button in place.
#[component]
fn AddButton(result: SearchResult) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (added, set_added) = signal(false);

    let on_add = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let result = result.clone();

        spawn_local(async move {
            let args = AddMovieArgs {
                imdb_id: &result.imdb_id,
                title: &result.title,
                year: &result.year,
                imdb_img: &result.poster,
            };
            match api::add_movie(&args).await {
                Ok(()) => {
                    set_added.set(true);
                    ctx.reload();
                }
                Err(ApiError::Duplicate) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Movie is already in your list");
                    }
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("add error: {e}").into());
                }
            }
        });
    };

    view! {
        {move || if added.get() {
            view! {
                <span class="ml__search-result--add-movie-success">"Added to My List"</span>
            }.into_any()
        } else {
            let on_add = on_add.clone();
            view! {
                <button class="ml__search-result--add-button" on:click=on_add>
                    "Add to My List"
                </button>
            }.into_any()
        }}
    }
}
