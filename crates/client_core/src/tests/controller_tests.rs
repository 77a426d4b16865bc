use super::*;
use async_trait::async_trait;
use shared::{
    domain::FeatureVector,
    error::ErrorPayload,
    protocol::{PredictionResult, Probability},
};
use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::Rc,
    sync::{Arc, Mutex},
};
use tokio::sync::Notify;

use crate::view::{RegionView, StyleClass, UiState, NEGATIVE_MESSAGE, POSITIVE_MESSAGE};

struct ScriptedCall {
    gate: Option<Arc<Notify>>,
    response: Result<PredictionResult, DisplayError>,
}

#[derive(Default)]
struct ScriptedScoring {
    calls: Mutex<VecDeque<ScriptedCall>>,
    requests: Mutex<Vec<FeatureVector>>,
}

impl ScriptedScoring {
    fn respond(self, response: Result<PredictionResult, DisplayError>) -> Self {
        self.calls.lock().expect("calls").push_back(ScriptedCall {
            gate: None,
            response,
        });
        self
    }

    fn respond_after(
        self,
        gate: Arc<Notify>,
        response: Result<PredictionResult, DisplayError>,
    ) -> Self {
        self.calls.lock().expect("calls").push_back(ScriptedCall {
            gate: Some(gate),
            response,
        });
        self
    }

    fn request_count(&self) -> usize {
        self.requests.lock().expect("requests").len()
    }
}

#[async_trait]
impl ScoringService for ScriptedScoring {
    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, DisplayError> {
        self.requests.lock().expect("requests").push(features.clone());
        let call = self
            .calls
            .lock()
            .expect("calls")
            .pop_front()
            .expect("unexpected prediction request");
        if let Some(gate) = call.gate {
            gate.notified().await;
        }
        call.response
    }
}

/// Region set shared by overlapping submissions on one task.
#[derive(Clone, Default)]
struct SharedView(Rc<RefCell<RegionView>>);

impl ResultView for SharedView {
    fn reset(&mut self) {
        self.0.borrow_mut().reset();
    }

    fn show_positive(&mut self, probability: &str) {
        self.0.borrow_mut().show_positive(probability);
    }

    fn show_negative(&mut self, probability: &str) {
        self.0.borrow_mut().show_negative(probability);
    }

    fn show_error(&mut self, error: &DisplayError) {
        self.0.borrow_mut().show_error(error);
    }
}

fn result(prediction: &str, probability: Option<f64>) -> PredictionResult {
    PredictionResult {
        prediction: prediction.to_string(),
        probability: probability.map(|value| {
            Probability::Number(serde_json::Number::from_f64(value).expect("finite"))
        }),
    }
}

fn form() -> FormInput {
    [("age", "48"), ("bp", "80"), ("sc", "1.2")]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn positive_label_renders_high_risk_result() {
    let controller = PredictionController::new(
        ScriptedScoring::default().respond(Ok(result("CKD Positive", Some(0.87)))),
    );
    let mut view = RegionView::default();

    let outcome = controller.handle_submit(&form(), &mut view).await;

    assert_eq!(outcome, SubmitOutcome::Positive);
    assert_eq!(view.ui_state(), UiState::SuccessPositive);
    assert!(!view.result_hidden);
    assert!(view.error_hidden);
    assert_eq!(view.prediction_text, POSITIVE_MESSAGE);
    assert_eq!(view.style_class, Some(StyleClass::Ckd));
    assert_eq!(view.probability_text, "Probability of disease: 0.87");
}

#[tokio::test]
async fn label_without_marker_renders_low_risk_result() {
    let controller = PredictionController::new(
        ScriptedScoring::default().respond(Ok(result("Healthy", Some(0.12)))),
    );
    let mut view = RegionView::default();

    let outcome = controller.handle_submit(&form(), &mut view).await;

    assert_eq!(outcome, SubmitOutcome::Negative);
    assert_eq!(view.ui_state(), UiState::SuccessNegative);
    assert_eq!(view.prediction_text, NEGATIVE_MESSAGE);
    assert_eq!(view.style_class, Some(StyleClass::NotCkd));
    assert_eq!(view.probability_text, "Probability of disease: 0.12");
}

#[tokio::test]
async fn marker_anywhere_in_label_is_positive() {
    let controller = PredictionController::new(
        ScriptedScoring::default()
            .respond(Ok(result("No CKD", Some(0.12))))
            .respond(Ok(result("No Kidney Disease (Not CKD)", None))),
    );
    let mut view = RegionView::default();

    assert_eq!(
        controller.handle_submit(&form(), &mut view).await,
        SubmitOutcome::Positive
    );
    assert_eq!(
        controller.handle_submit(&form(), &mut view).await,
        SubmitOutcome::Positive
    );
    assert_eq!(view.probability_text, "Probability of disease: unavailable");
}

#[tokio::test]
async fn lowercase_marker_takes_negative_branch() {
    let controller =
        PredictionController::new(ScriptedScoring::default().respond(Ok(result("ckd", None))));
    let mut view = RegionView::default();

    let outcome = controller.handle_submit(&form(), &mut view).await;

    assert_eq!(outcome, SubmitOutcome::Negative);
    assert_eq!(view.style_class, Some(StyleClass::NotCkd));
}

#[tokio::test]
async fn rejected_request_shows_backend_message() {
    let controller = PredictionController::new(ScriptedScoring::default().respond(Err(
        DisplayError::rejected(400, &ErrorPayload::new("Invalid age value")),
    )));
    let mut view = RegionView::default();

    let outcome = controller.handle_submit(&form(), &mut view).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(view.ui_state(), UiState::Error);
    assert_eq!(view.error_text, "Error: Invalid age value");
    assert!(view.result_hidden);
}

#[tokio::test]
async fn rejected_request_without_message_shows_fallback() {
    let controller = PredictionController::new(
        ScriptedScoring::default().respond(Err(DisplayError::rejected(
            500,
            &ErrorPayload::default(),
        ))),
    );
    let mut view = RegionView::default();

    controller.handle_submit(&form(), &mut view).await;

    assert_eq!(view.error_text, "Error: Something went wrong.");
}

#[tokio::test]
async fn non_numeric_field_is_still_sent() {
    let scoring = ScriptedScoring::default().respond(Ok(result("Healthy", Some(0.3))));
    let controller = PredictionController::new(scoring);
    let form: FormInput = [("age", "forty-eight"), ("bp", "80")].into_iter().collect();
    let mut view = RegionView::default();

    controller.handle_submit(&form, &mut view).await;

    let requests = controller.service().requests.lock().expect("requests");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].get("age").expect("age").is_nan());
    assert_eq!(requests[0].get("bp"), Some(80.0));
}

#[tokio::test]
async fn every_submission_clears_previous_render_first() {
    let gate = Arc::new(Notify::new());
    let controller = PredictionController::new(
        ScriptedScoring::default()
            .respond(Err(DisplayError::transport("offline")))
            .respond_after(gate.clone(), Ok(result("CKD", Some(0.9)))),
    );
    let view = SharedView::default();

    controller.handle_submit(&form(), &mut view.clone()).await;
    assert_eq!(view.0.borrow().ui_state(), UiState::Error);

    let second_form = form();
    let mut second_view = view.clone();
    let pending = controller.handle_submit(&second_form, &mut second_view);
    let observe = async {
        tokio::task::yield_now().await;
        let snapshot = view.0.borrow().clone();
        gate.notify_one();
        snapshot
    };
    let (outcome, in_flight) = tokio::join!(pending, observe);

    assert!(in_flight.result_hidden);
    assert!(in_flight.error_hidden);
    assert_eq!(in_flight.icon, None);
    assert_eq!(outcome, SubmitOutcome::Positive);
    assert_eq!(view.0.borrow().ui_state(), UiState::SuccessPositive);
}

#[tokio::test]
async fn overlapping_submissions_resolve_last_writer_wins() {
    let slow_gate = Arc::new(Notify::new());
    let controller = PredictionController::new(
        ScriptedScoring::default()
            .respond_after(slow_gate.clone(), Ok(result("CKD", Some(0.9))))
            .respond(Err(DisplayError::transport("offline"))),
    );
    let view = SharedView::default();

    let slow_form = form();
    let mut slow_view = view.clone();
    let slow = controller.handle_submit(&slow_form, &mut slow_view);
    let fast = async {
        let outcome = controller.handle_submit(&form(), &mut view.clone()).await;
        assert_eq!(view.0.borrow().ui_state(), UiState::Error);
        slow_gate.notify_one();
        outcome
    };
    let (slow_outcome, fast_outcome) = tokio::join!(slow, fast);

    assert_eq!(slow_outcome, SubmitOutcome::Positive);
    assert!(matches!(fast_outcome, SubmitOutcome::Failed(_)));
    assert_eq!(controller.service().request_count(), 2);
    let final_view = view.0.borrow();
    assert_eq!(final_view.ui_state(), UiState::SuccessPositive);
    assert!(final_view.error_hidden);
}

#[tokio::test]
async fn guard_ignores_submit_while_request_pending() {
    let gate = Arc::new(Notify::new());
    let controller = PredictionController::new(
        ScriptedScoring::default()
            .respond_after(gate.clone(), Ok(result("Healthy", Some(0.2))))
            .respond(Ok(result("CKD", Some(0.8)))),
    )
    .with_submission_guard();
    assert!(controller.guards_resubmission());
    let view = SharedView::default();

    let first_form = form();
    let mut first_view = view.clone();
    let first = controller.handle_submit(&first_form, &mut first_view);
    let second = async {
        tokio::task::yield_now().await;
        let outcome = controller.handle_submit(&form(), &mut view.clone()).await;
        gate.notify_one();
        outcome
    };
    let (first_outcome, second_outcome) = tokio::join!(first, second);

    assert_eq!(first_outcome, SubmitOutcome::Negative);
    assert_eq!(second_outcome, SubmitOutcome::Ignored);
    assert_eq!(controller.service().request_count(), 1);

    let mut view = view;
    assert_eq!(
        controller.handle_submit(&form(), &mut view).await,
        SubmitOutcome::Positive
    );
    assert_eq!(controller.service().request_count(), 2);
}
