//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Serialize};

/// One record from the movie search endpoint.
///
/// Field casing follows the external movie database passed through by the
/// server; `ml_inList` is only set on records already saved by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "ml_inList", default)]
    pub in_list: bool,
}

impl SearchResult {
    /// Poster URL safe to put in an `img src`. The external API reports a
    /// missing poster as the literal string "N/A".
    pub fn poster_src(&self) -> &str {
        if self.poster == "N/A" {
            ""
        } else {
            &self.poster
        }
    }
}

/// A movie saved to the user's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub imdb_img: String,
    pub favorite: bool,
}

/// Response body of the favorite-toggle endpoint. The server also sends a
/// `message` field; only the boolean matters here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteStatus {
    pub favorite: bool,
}

/// Icon class for the favorite star. The displayed state always comes from
/// the server's boolean, never from a local guess.
pub fn favorite_class(favorite: bool) -> &'static str {
    if favorite {
        "fas fa-star ml__my-list--fav"
    } else {
        "far fa-star ml__my-list--fav"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_decodes_external_casing() {
        let json = r#"{
            "imdbID": "tt0133093",
            "Title": "The Matrix",
            "Year": "1999",
            "Poster": "https://example.com/matrix.jpg",
            "ml_inList": true
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.imdb_id, "tt0133093");
        assert_eq!(result.title, "The Matrix");
        assert_eq!(result.year, "1999");
        assert!(result.in_list);
    }

    #[test]
    fn missing_membership_flag_defaults_to_false() {
        let json = r#"{
            "imdbID": "tt0133093",
            "Title": "The Matrix",
            "Year": "1999",
            "Poster": "N/A"
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(!result.in_list);
    }

    #[test]
    fn poster_src_blanks_unavailable_posters() {
        let mut result: SearchResult = serde_json::from_str(
            r#"{"imdbID":"tt1","Title":"T","Year":"2000","Poster":"N/A"}"#,
        )
        .unwrap();
        assert_eq!(result.poster_src(), "");

        result.poster = "https://example.com/p.jpg".to_string();
        assert_eq!(result.poster_src(), "https://example.com/p.jpg");
    }

    #[test]
    fn movie_entry_decodes() {
        let json = r#"{
            "imdb_id": "tt0133093",
            "title": "The Matrix",
            "year": "1999",
            "imdb_img": "https://example.com/matrix.jpg",
            "favorite": false
        }"#;
        let entry: MovieEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.imdb_id, "tt0133093");
        assert!(!entry.favorite);
    }

    #[test]
    fn favorite_status_ignores_extra_fields() {
        let status: FavoriteStatus =
            serde_json::from_str(r#"{"message":"success","favorite":true}"#).unwrap();
        assert!(status.favorite);
    }

    #[test]
    fn favorite_class_follows_boolean() {
        assert_eq!(favorite_class(true), "fas fa-star ml__my-list--fav");
        assert_eq!(favorite_class(false), "far fa-star ml__my-list--fav");
    }
}
