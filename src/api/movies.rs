//! Movie List Commands
//!
//! Frontend bindings for the saved-list endpoints: add, remove, favorite
//! toggle, and the list fetch.

use serde::Serialize;

use super::{delete, get_json, is_success, json_body, post_empty, post_json, send, ApiError};
use crate::models::{FavoriteStatus, MovieEntry};

/// Payload of the add-movie request, lifted from a search result.
#[derive(Serialize)]
pub struct AddMovieArgs<'a> {
    pub imdb_id: &'a str,
    pub title: &'a str,
    pub year: &'a str,
    pub imdb_img: &'a str,
}

fn movie_url(imdb_id: &str) -> String {
    format!("/movie/{imdb_id}")
}

fn favorite_url(imdb_id: &str) -> String {
    format!("/movie/{imdb_id}/favorite")
}

fn list_url(favorites_only: bool) -> &'static str {
    if favorites_only {
        "/movies?filter=favorites"
    } else {
        "/movies"
    }
}

/// Fetch the user's saved list, filtered server-side when the favorites
/// view is active.
pub async fn list_movies(favorites_only: bool) -> Result<Vec<MovieEntry>, ApiError> {
    let resp = send(get_json(list_url(favorites_only))?).await?;
    if !is_success(resp.status()) {
        return Err(ApiError::Status(resp.status()));
    }
    json_body(&resp).await
}

/// Save a movie to the user's list. The server answers 201 on creation and
/// 400 when the movie is already present.
pub async fn add_movie(args: &AddMovieArgs<'_>) -> Result<(), ApiError> {
    let body = serde_json::to_string(args).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = send(post_json("/movie", &body)?).await?;
    match resp.status() {
        s if is_success(s) => Ok(()),
        400 => Err(ApiError::Duplicate),
        s => Err(ApiError::Status(s)),
    }
}

/// Remove a movie from the user's list.
pub async fn remove_movie(imdb_id: &str) -> Result<(), ApiError> {
    let resp = send(delete(&movie_url(imdb_id))?).await?;
    if !is_success(resp.status()) {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// Flip the favorite flag server-side. Returns the resulting state from the
/// response body, which is the only authority on the flag.
pub async fn toggle_favorite(imdb_id: &str) -> Result<bool, ApiError> {
    let resp = send(post_empty(&favorite_url(imdb_id))?).await?;
    if !is_success(resp.status()) {
        return Err(ApiError::Status(resp.status()));
    }
    let status: FavoriteStatus = json_body(&resp).await?;
    Ok(status.favorite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_urls_are_scoped_by_id() {
        assert_eq!(movie_url("tt0133093"), "/movie/tt0133093");
        assert_eq!(favorite_url("tt0133093"), "/movie/tt0133093/favorite");
    }

    #[test]
    fn list_url_carries_favorites_filter() {
        assert_eq!(list_url(false), "/movies");
        assert_eq!(list_url(true), "/movies?filter=favorites");
    }

    #[test]
    fn add_movie_args_serialize_to_server_field_names() {
        let args = AddMovieArgs {
            imdb_id: "tt0133093",
            title: "The Matrix",
            year: "1999",
            imdb_img: "https://example.com/matrix.jpg",
        };
        let json: serde_json::Value = serde_json::to_value(&args).unwrap();
        assert_eq!(json["imdb_id"], "tt0133093");
        assert_eq!(json["title"], "The Matrix");
        assert_eq!(json["year"], "1999");
        assert_eq!(json["imdb_img"], "https://example.com/matrix.jpg");
    }
}
