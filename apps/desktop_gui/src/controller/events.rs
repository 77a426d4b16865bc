//! Worker-to-UI events and how they land on the region set.

use client_core::{DisplayError, RegionView, ResultView};

#[derive(Debug)]
pub enum UiEvent {
    Reset,
    ShowPositive { probability: String },
    ShowNegative { probability: String },
    ShowError(DisplayError),
    Info(String),
    WorkerFailed(String),
}

impl UiEvent {
    pub fn apply(self, regions: &mut RegionView, status: &mut String) {
        match self {
            UiEvent::Reset => regions.reset(),
            UiEvent::ShowPositive { probability } => regions.show_positive(&probability),
            UiEvent::ShowNegative { probability } => regions.show_negative(&probability),
            UiEvent::ShowError(err) => regions.show_error(&err),
            UiEvent::Info(message) => *status = message,
            UiEvent::WorkerFailed(message) => {
                *status = format!("Prediction worker failed to start: {message}");
            }
        }
    }
}
