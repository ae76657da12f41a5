pub mod adapter;
pub mod client;
pub mod error;
pub mod types;

pub use adapter::{RecommendationAdapter, DEFAULT_CANONICAL_HOST};
pub use client::{Prediction, RecommendClient};
pub use error::RecommendError;
pub use types::{PredictRequest, PredictionResult};
