//! UI layer: app shell and the declared form fields.

pub mod app;
pub mod form;

pub use app::PredictorApp;
