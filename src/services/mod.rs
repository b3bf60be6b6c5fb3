pub mod movie_info;
pub mod recommendation;
pub mod web_search;
pub mod wikipedia;

pub use movie_info::{MovieInfo, MovieInfoSource};
pub use recommendation::{RecommendationClient, Recommender};
