//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the saved
//! movie list. Search results stay in plain signals owned by the app root;
//! only the saved list is shared between components.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::MovieEntry;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The user's saved movies, as last reported by the server
    pub movies: Vec<MovieEntry>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a movie from the store by IMDb ID
pub fn store_remove_movie(store: &AppStore, imdb_id: &str) {
    store.movies().write().retain(|movie| movie.imdb_id != imdb_id);
}

/// Set the favorite flag of a stored movie by IMDb ID
pub fn store_set_favorite(store: &AppStore, imdb_id: &str, favorite: bool) {
    store
        .movies()
        .write()
        .iter_mut()
        .find(|movie| movie.imdb_id == imdb_id)
        .map(|movie| movie.favorite = favorite);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(imdb_id: &str, favorite: bool) -> MovieEntry {
        MovieEntry {
            imdb_id: imdb_id.to_string(),
            title: format!("Movie {imdb_id}"),
            year: "1999".to_string(),
            imdb_img: String::new(),
            favorite,
        }
    }

    #[test]
    fn remove_movie_drops_only_the_matching_entry() {
        let store = Store::new(AppState {
            movies: vec![entry("tt1", false), entry("tt2", true)],
        });

        store_remove_movie(&store, "tt1");

        let movies = store.movies().read();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].imdb_id, "tt2");
    }

    #[test]
    fn removing_the_last_movie_empties_the_list() {
        let store = Store::new(AppState {
            movies: vec![entry("tt1", false)],
        });

        store_remove_movie(&store, "tt1");

        // The empty list is the placeholder condition in MovieList
        assert!(store.movies().read().is_empty());
    }

    #[test]
    fn set_favorite_rewrites_only_the_matching_entry() {
        let store = Store::new(AppState {
            movies: vec![entry("tt1", false), entry("tt2", false)],
        });

        store_set_favorite(&store, "tt2", true);

        let movies = store.movies().read();
        assert!(!movies[0].favorite);
        assert!(movies[1].favorite);
    }
}
