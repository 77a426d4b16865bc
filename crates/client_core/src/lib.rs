//! Client-side orchestration for the kidney-risk prediction form.

pub mod config;
pub mod controller;
pub mod error;
pub mod transport;
pub mod view;

pub use controller::{PredictionController, SubmitOutcome};
pub use error::DisplayError;
pub use transport::{HttpScoringClient, ScoringService};
pub use view::{RegionView, ResultIcon, ResultVariant, ResultView, StyleClass, UiState};
