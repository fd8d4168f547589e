use serde::{Deserialize, Serialize};

/// Image host prefix shared by the grid and the detail overlay.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const POSTER_WIDTH: &str = "w500";

pub const GRID_RATING_PREFIX: &str = "⭐ ";
pub const DETAIL_RATING_PREFIX: &str = "⭐";

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MovieId);

/// A catalog record as returned in the `results` array of the popular listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub title: String,
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
}

impl Movie {
    /// `None` when the catalog has no poster for this record.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        let path = self.poster_path.as_deref()?;
        if path.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{POSTER_WIDTH}{path}",
            image_base_url.trim_end_matches('/')
        ))
    }

    pub fn grid_rating_label(&self) -> String {
        format!("{GRID_RATING_PREFIX}{}", format_rating(self.vote_average))
    }

    pub fn detail_rating_label(&self) -> String {
        format!("{DETAIL_RATING_PREFIX}{}", format_rating(self.vote_average))
    }
}

/// One decimal place, with exact ties (`7.25`, `6.75`) rounded away from zero.
///
/// `{:.1}` alone rounds those ties to the even digit.
pub fn format_rating(vote_average: f64) -> String {
    let exact_tie = (vote_average * 4.0).fract() == 0.0 && (vote_average * 2.0).fract() != 0.0;
    if exact_tie {
        format!("{:.1}", (vote_average * 10.0).round() / 10.0)
    } else {
        format!("{vote_average:.1}")
    }
}
