pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{MatchingRatingRequest, MatchingRatingResponse, MatchingRatingWordRequest};
pub use error::RatingServiceError;
pub use model::{MatchingRating, MatchingRatingWord};
pub use service::{RatingService, RatingServiceApi};
