//! Presentation variants and the port the controller renders through.

use std::fmt;

use shared::protocol::PredictionResult;

use crate::error::DisplayError;

pub const POSITIVE_MESSAGE: &str = "Yes, you have a high probability of having kidney disease.";
pub const NEGATIVE_MESSAGE: &str = "You do not have a high probability of having kidney disease.";
pub const PROBABILITY_CAPTION: &str = "Probability of disease: ";

/// Surface the controller writes into. Implementations own the region set.
pub trait ResultView {
    /// Hide both regions and clear the icon.
    fn reset(&mut self);
    fn show_positive(&mut self, probability: &str);
    fn show_negative(&mut self, probability: &str);
    fn show_error(&mut self, error: &DisplayError);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultVariant {
    Positive,
    Negative,
}

impl ResultVariant {
    pub fn classify(result: &PredictionResult) -> Self {
        if result.is_positive() {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_MESSAGE,
            Self::Negative => NEGATIVE_MESSAGE,
        }
    }

    pub fn style_class(self) -> StyleClass {
        match self {
            Self::Positive => StyleClass::Ckd,
            Self::Negative => StyleClass::NotCkd,
        }
    }

    pub fn icon(self) -> ResultIcon {
        match self {
            Self::Positive => ResultIcon::WarningTriangle,
            Self::Negative => ResultIcon::Checkmark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Ckd,
    NotCkd,
}

impl StyleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ckd => "ckd",
            Self::NotCkd => "notckd",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultIcon {
    WarningTriangle,
    Checkmark,
}

impl ResultIcon {
    /// Stroke color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Self::WarningTriangle => "#f44336",
            Self::Checkmark => "#4caf50",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::WarningTriangle => [0xf4, 0x43, 0x36],
            Self::Checkmark => [0x4c, 0xaf, 0x50],
        }
    }

    /// Markup fragment for surfaces that render SVG.
    pub fn svg(self) -> String {
        let shape = match self {
            Self::WarningTriangle => concat!(
                r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/>"#,
                r#"<line x1="12" y1="9" x2="12" y2="13"/>"#,
                r#"<line x1="12" y1="17" x2="12.01" y2="17"/>"#,
            ),
            Self::Checkmark => r#"<polyline points="20 6 9 17 4 12"/>"#,
        };
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="result-icon" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{shape}</svg>"#,
            self.color()
        )
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::WarningTriangle => "⚠",
            Self::Checkmark => "✔",
        }
    }
}

pub fn probability_caption(probability: &str) -> String {
    format!("{PROBABILITY_CAPTION}{probability}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    SuccessPositive,
    SuccessNegative,
    Error,
}

/// In-memory region set: `result-container`, `prediction-text`,
/// `probability-text`, `error-message` and `result-icon-container`.
///
/// Revealing one region hides the other, so the two are never visible
/// together even when overlapping submissions interleave their renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionView {
    pub result_hidden: bool,
    pub error_hidden: bool,
    pub prediction_text: String,
    pub style_class: Option<StyleClass>,
    pub probability_text: String,
    pub error_text: String,
    pub icon: Option<ResultIcon>,
}

impl Default for RegionView {
    fn default() -> Self {
        Self {
            result_hidden: true,
            error_hidden: true,
            prediction_text: String::new(),
            style_class: None,
            probability_text: String::new(),
            error_text: String::new(),
            icon: None,
        }
    }
}

impl RegionView {
    pub fn ui_state(&self) -> UiState {
        if !self.error_hidden {
            return UiState::Error;
        }
        if self.result_hidden {
            return UiState::Idle;
        }
        match self.style_class {
            Some(StyleClass::Ckd) => UiState::SuccessPositive,
            Some(StyleClass::NotCkd) => UiState::SuccessNegative,
            None => UiState::Idle,
        }
    }

    fn show_variant(&mut self, variant: ResultVariant, probability: &str) {
        self.prediction_text = variant.message().to_string();
        self.style_class = Some(variant.style_class());
        self.icon = Some(variant.icon());
        self.probability_text = probability_caption(probability);
        self.error_hidden = true;
        self.result_hidden = false;
    }
}

impl ResultView for RegionView {
    fn reset(&mut self) {
        self.result_hidden = true;
        self.error_hidden = true;
        self.icon = None;
    }

    fn show_positive(&mut self, probability: &str) {
        self.show_variant(ResultVariant::Positive, probability);
    }

    fn show_negative(&mut self, probability: &str) {
        self.show_variant(ResultVariant::Negative, probability);
    }

    fn show_error(&mut self, error: &DisplayError) {
        self.error_text = error.render();
        self.result_hidden = true;
        self.error_hidden = false;
    }
}
