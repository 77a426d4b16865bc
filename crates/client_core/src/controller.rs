//! Submit handling: collect, call, render.

use std::sync::atomic::{AtomicBool, Ordering};

use shared::domain::FormInput;
use tracing::{debug, error, info};

use crate::{
    error::DisplayError,
    transport::ScoringService,
    view::{ResultVariant, ResultView},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Positive,
    Negative,
    Failed(DisplayError),
    /// Dropped because another submission was still pending.
    Ignored,
}

pub struct PredictionController<S> {
    service: S,
    in_flight: Option<AtomicBool>,
}

impl<S: ScoringService> PredictionController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            in_flight: None,
        }
    }

    /// Rejects a submit while a previous one is pending. Off unless enabled.
    pub fn with_submission_guard(mut self) -> Self {
        self.in_flight = Some(AtomicBool::new(false));
        self
    }

    pub fn guards_resubmission(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn handle_submit<V: ResultView>(
        &self,
        form: &FormInput,
        view: &mut V,
    ) -> SubmitOutcome {
        let _in_flight = match self.begin_submission() {
            Ok(marker) => marker,
            Err(()) => {
                debug!("submission already in flight; ignoring submit");
                return SubmitOutcome::Ignored;
            }
        };

        let features = form.to_feature_vector();
        view.reset();

        debug!(fields = features.len(), "sending prediction request");
        match self.service.predict(&features).await {
            Ok(result) => {
                let variant = ResultVariant::classify(&result);
                let probability = result.probability_display();
                info!(
                    label = %result.prediction,
                    probability = %probability,
                    ?variant,
                    "prediction received"
                );
                match variant {
                    ResultVariant::Positive => {
                        view.show_positive(&probability);
                        SubmitOutcome::Positive
                    }
                    ResultVariant::Negative => {
                        view.show_negative(&probability);
                        SubmitOutcome::Negative
                    }
                }
            }
            Err(err) => {
                error!(error = %err, status = ?err.status(), "prediction failed");
                view.show_error(&err);
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn begin_submission(&self) -> Result<Option<InFlight<'_>>, ()> {
        let Some(flag) = &self.in_flight else {
            return Ok(None);
        };
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Some(InFlight(flag)))
            .map_err(|_| ())
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
