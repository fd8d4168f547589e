use serde::{Deserialize, Serialize};

use crate::domain::Movie;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularMoviesResponse {
    #[serde(default = "first_page")]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

fn first_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::MovieId, error::CatalogApiError};

    #[test]
    fn keeps_results_in_response_order() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 1, "poster_path": "/a.jpg", "title": "A", "vote_average": 7.0,
                 "release_date": "2024-01-01", "overview": "first", "popularity": 99.1},
                {"id": 2, "poster_path": "/b.jpg", "title": "B", "vote_average": 8.456,
                 "release_date": "2024-02-02", "overview": "second", "adult": false}
            ],
            "total_pages": 500,
            "total_results": 10000
        }"#;
        let page: PopularMoviesResponse = serde_json::from_str(body).expect("decode");
        let ids: Vec<MovieId> = page.results.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MovieId(1), MovieId(2)]);
        assert_eq!(page.total_pages, Some(500));
    }

    #[test]
    fn rejects_body_without_results() {
        let err = serde_json::from_str::<PopularMoviesResponse>(r#"{"page": 1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn parses_catalog_error_body() {
        let err = CatalogApiError::from_body(
            r#"{"status_code": 7, "status_message": "Invalid API key: You must be granted a valid key.", "success": false}"#,
        )
        .expect("error body");
        assert_eq!(err.status_code, 7);
        assert!(err.to_string().contains("Invalid API key"));
        assert!(CatalogApiError::from_body("<html>bad gateway</html>").is_none());
    }
}
