//! Backend commands queued from UI to backend worker.

use shared::domain::MovieId;

pub enum BackendCommand {
    FetchPopularMovies,
    FetchPoster { movie_id: MovieId, poster_url: String },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchPopularMovies => "fetch_popular_movies",
            Self::FetchPoster { .. } => "fetch_poster",
            Self::Shutdown => "shutdown",
        }
    }
}
