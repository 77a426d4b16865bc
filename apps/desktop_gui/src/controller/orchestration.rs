//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::FormInput;

use crate::{backend_bridge::commands::BackendCommand, ui::form::FormField};

/// Every declared field goes into the form, empty ones included.
pub fn collect_form(fields: &[FormField]) -> FormInput {
    fields
        .iter()
        .map(|field| (field.name, field.value.as_str()))
        .collect()
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::Submit { .. } => "submit",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            status.clear();
            tracing::debug!(command = cmd_name, "queued ui->backend command");
        }
        Err(TrySendError::Full(_)) => {
            *status = "Prediction queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Prediction worker disconnected (possible startup failure); restart the app"
                    .to_string();
        }
    }
}
