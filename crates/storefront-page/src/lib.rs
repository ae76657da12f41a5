pub mod composer;
pub mod error;
pub mod session;
pub mod source;
pub mod tracker;
pub mod view;

pub use composer::{ProductPage, RequestState};
pub use error::PageError;
pub use session::MountedPage;
pub use source::{PredictionSource, RecommendationSource};
pub use tracker::{ChannelTracker, VisitorTracker};
pub use view::{CollectionSection, ImageView, ProductPageView, SelectedVariantView, VariantOption};
