//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use anyhow::Result;
use client_core::{config::ClientSettings, HttpScoringClient, PredictionController};
use crossbeam_channel::{Receiver, Sender};

use crate::{
    backend_bridge::{channel_view::ChannelView, commands::BackendCommand},
    controller::events::UiEvent,
};

pub fn build_controller(settings: &ClientSettings) -> Result<PredictionController<HttpScoringClient>> {
    let controller = PredictionController::new(HttpScoringClient::new(settings.predict_url()?));
    Ok(if settings.guard_resubmission {
        controller.with_submission_guard()
    } else {
        controller
    })
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let controller = match build_controller(&settings) {
            Ok(controller) => Arc::new(controller),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!("{err:#}")));
                tracing::error!("failed to configure prediction client: {err:#}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(
                predict_url = %controller.service().predict_url(),
                guarded = controller.guards_resubmission(),
                "prediction worker ready"
            );
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Scoring endpoint: {}",
                controller.service().predict_url()
            )));

            // Each submit runs independently; overlapping responses land in arrival order.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Submit { form } => {
                        let controller = Arc::clone(&controller);
                        let mut view = ChannelView::new(ui_tx.clone());
                        tokio::spawn(async move {
                            let outcome = controller.handle_submit(&form, &mut view).await;
                            tracing::debug!(?outcome, "submission finished");
                        });
                    }
                }
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_guarded_controller_when_configured() {
        let settings = ClientSettings {
            server_url: "http://127.0.0.1:5000".into(),
            guard_resubmission: true,
        };
        let controller = build_controller(&settings).expect("controller");
        assert!(controller.guards_resubmission());
        assert_eq!(
            controller.service().predict_url().as_str(),
            "http://127.0.0.1:5000/predict"
        );
    }

    #[test]
    fn invalid_server_url_is_reported() {
        let settings = ClientSettings {
            server_url: "not a url".into(),
            guard_resubmission: false,
        };
        let err = build_controller(&settings).err().expect("must fail");
        assert!(format!("{err:#}").contains("invalid server url"));
    }
}
