//! Favorite Star Component
//!
//! Star icon whose state always mirrors the server: the class is set from
//! the toggle response's boolean, never from a local guess. On the
//! favorites-only view, unfavoriting drops the row immediately.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::favorite_class;
use crate::store::{store_remove_movie, store_set_favorite, use_app_store};

#[component]
pub fn FavoriteStar(imdb_id: String, favorite: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (favorite, set_favorite) = signal(favorite);

    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let id = imdb_id.clone();

        spawn_local(async move {
            match api::toggle_favorite(&id).await {
                Ok(flag) => {
                    // Row may already be gone if a response removed it
                    let _ = set_favorite.try_set(flag);
                    store_set_favorite(&store, &id, flag);
                    if !flag && ctx.favorites_only.get() {
                        store_remove_movie(&store, &id);
                    }
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("err: {e}").into());
                }
            }
        });
    };

    view! {
        <i class=move || favorite_class(favorite.get()) on:click=on_toggle></i>
    }
}
