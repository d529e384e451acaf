//! Movie List Component
//!
//! The user's saved list. Rows are removed on a successful DELETE; when the
//! last row goes, the list gives way to a placeholder message.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::FavoriteStar;
use crate::models::MovieEntry;
use crate::store::{store_remove_movie, use_app_store, AppStateStoreFields};

/// Saved-list container
#[component]
pub fn MovieList() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || if store.movies().read().is_empty() {
            view! { <h3 class="ml__my-list--empty">"No movies found...."</h3> }.into_any()
        } else {
            view! {
                <ul id="myMovieList" class="ml__my-list">
                    <For
                        each=move || store.movies().get()
                        key=|movie| movie.imdb_id.clone()
                        children=move |movie| view! { <MovieRow movie=movie /> }
                    />
                </ul>
            }.into_any()
        }}
    }
}

/// One saved movie: poster, title, year, favorite star, remove button.
#[component]
fn MovieRow(movie: MovieEntry) -> impl IntoView {
    let store = use_app_store();
    let imdb_id = movie.imdb_id.clone();
    let href = format!("/movie/{}", movie.imdb_id);

    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let id = imdb_id.clone();

        spawn_local(async move {
            match api::remove_movie(&id).await {
                Ok(()) => store_remove_movie(&store, &id),
                Err(e) => {
                    web_sys::console::log_1(&format!("err: {e}").into());
                }
            }
        });
    };

    view! {
        <li class="ml__my-list--item">
            <a href=href>
                <img class="ml__my-list--image" src=movie.imdb_img.clone() alt=movie.title.clone() />
                <h3 class="ml__my-list--title">{movie.title.clone()}</h3>
                <p class="ml__my-list--year">{movie.year.clone()}</p>
            </a>
            <FavoriteStar imdb_id=movie.imdb_id.clone() favorite=movie.favorite />
            <button class="ml__my-list--remove-button" on:click=on_remove>
                "Remove"
            </button>
        </li>
    }
}
