//! Bridge between the egui thread and the prediction worker.

pub mod channel_view;
pub mod commands;
pub mod runtime;
