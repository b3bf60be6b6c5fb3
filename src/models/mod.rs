pub mod lookup;
pub mod preferences;

pub use lookup::{LookupQuery, LookupResult, WebHit, MAX_WEB_HITS};
pub use preferences::{Genre, PreferenceSelection, YEAR_MAX, YEAR_MIN};
