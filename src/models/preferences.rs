use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Inclusive bounds of the release-year selector
pub const YEAR_MIN: i32 = 1960;
pub const YEAR_MAX: i32 = 2025;

/// The fixed genre list offered by the preference form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Romance,
    Thriller,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
    Musical,
    Documentary,
    Suspense,
    Adventure,
    Historical,
    Mystery,
    Animation,
    Family,
    Crime,
    Biography,
    Sports,
    War,
}

impl Genre {
    /// Every selectable genre, in form order
    pub const ALL: [Genre; 20] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Romance,
        Genre::Thriller,
        Genre::Horror,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Musical,
        Genre::Documentary,
        Genre::Suspense,
        Genre::Adventure,
        Genre::Historical,
        Genre::Mystery,
        Genre::Animation,
        Genre::Family,
        Genre::Crime,
        Genre::Biography,
        Genre::Sports,
        Genre::War,
    ];

    /// The label shown in the form and interpolated into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
            Genre::Horror => "Horror",
            Genre::SciFi => "Sci-Fi",
            Genre::Fantasy => "Fantasy",
            Genre::Musical => "Musical",
            Genre::Documentary => "Documentary",
            Genre::Suspense => "Suspense",
            Genre::Adventure => "Adventure",
            Genre::Historical => "Historical",
            Genre::Mystery => "Mystery",
            Genre::Animation => "Animation",
            Genre::Family => "Family",
            Genre::Crime => "Crime",
            Genre::Biography => "Biography",
            Genre::Sports => "Sports",
            Genre::War => "War",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One recommendation request's worth of form state
///
/// The free-text fields may be empty; the model handles blank slots. The
/// year pair carries the range widget's invariant, re-checked at the API
/// boundary since JSON clients are not bound by the widget.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceSelection {
    pub genre: Genre,
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub actress: String,
    #[serde(default)]
    pub director: String,
    pub year_start: i32,
    pub year_end: i32,
}

impl PreferenceSelection {
    /// Enforces the year-range invariant: both ends within
    /// [YEAR_MIN, YEAR_MAX] and start <= end.
    pub fn validate(&self) -> AppResult<()> {
        if self.year_start > self.year_end {
            return Err(AppError::InvalidInput(format!(
                "Year range start {} is after end {}",
                self.year_start, self.year_end
            )));
        }
        if self.year_start < YEAR_MIN || self.year_end > YEAR_MAX {
            return Err(AppError::InvalidInput(format!(
                "Year range must fall within {} to {}",
                YEAR_MIN, YEAR_MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(year_start: i32, year_end: i32) -> PreferenceSelection {
        PreferenceSelection {
            genre: Genre::Comedy,
            actor: String::new(),
            actress: String::new(),
            director: String::new(),
            year_start,
            year_end,
        }
    }

    #[test]
    fn test_genre_list_has_twenty_entries() {
        assert_eq!(Genre::ALL.len(), 20);
        assert_eq!(Genre::ALL[0].label(), "Action");
        assert_eq!(Genre::ALL[19].label(), "War");
    }

    #[test]
    fn test_genre_serde_labels_round_trip() {
        for genre in Genre::ALL {
            let json = serde_json::to_string(&genre).unwrap();
            assert_eq!(json, format!("\"{}\"", genre.label()));
            let back: Genre = serde_json::from_str(&json).unwrap();
            assert_eq!(back, genre);
        }
    }

    #[test]
    fn test_sci_fi_label_uses_hyphen() {
        let genre: Genre = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(genre, Genre::SciFi);
    }

    #[test]
    fn test_validate_accepts_default_range() {
        assert!(selection(2000, 2024).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(selection(YEAR_MIN, YEAR_MAX).validate().is_ok());
        assert!(selection(1985, 1985).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        assert!(selection(2020, 2010).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds() {
        assert!(selection(1959, 2000).validate().is_err());
        assert!(selection(2000, 2026).validate().is_err());
    }
}
