//! `ResultView` that forwards renders to the egui thread.

use client_core::{DisplayError, ResultView};
use crossbeam_channel::Sender;

use crate::controller::events::UiEvent;

pub struct ChannelView {
    ui_tx: Sender<UiEvent>,
}

impl ChannelView {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn send(&self, event: UiEvent) {
        if let Err(err) = self.ui_tx.try_send(event) {
            tracing::warn!("dropped ui event: {err}");
        }
    }
}

impl ResultView for ChannelView {
    fn reset(&mut self) {
        self.send(UiEvent::Reset);
    }

    fn show_positive(&mut self, probability: &str) {
        self.send(UiEvent::ShowPositive {
            probability: probability.to_string(),
        });
    }

    fn show_negative(&mut self, probability: &str) {
        self.send(UiEvent::ShowNegative {
            probability: probability.to_string(),
        });
    }

    fn show_error(&mut self, error: &DisplayError) {
        self.send(UiEvent::ShowError(error.clone()));
    }
}
