//! UI Components
//!
//! Reusable Leptos components.

mod favorite_star;
mod movie_list;
mod search_form;
mod search_results;

pub use favorite_star::FavoriteStar;
pub use movie_list::MovieList;
pub use search_form::SearchForm;
pub use search_results::SearchResults;
