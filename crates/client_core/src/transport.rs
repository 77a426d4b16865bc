//! Outbound call to the scoring endpoint.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::FeatureVector,
    error::ErrorPayload,
    protocol::{PredictionResult, PREDICT_PATH},
};
use url::Url;

use crate::error::DisplayError;

#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, DisplayError>;
}

/// Resolves the fixed endpoint path against the server origin, replacing any
/// path the base URL already carries.
pub fn resolve_predict_url(server_url: &str) -> Result<Url, url::ParseError> {
    Url::parse(server_url.trim())?.join(PREDICT_PATH)
}

#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    http: Client,
    predict_url: Url,
}

impl HttpScoringClient {
    pub fn new(predict_url: Url) -> Self {
        Self {
            http: Client::new(),
            predict_url,
        }
    }

    pub fn from_server_url(server_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(resolve_predict_url(server_url)?))
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }
}

#[async_trait]
impl ScoringService for HttpScoringClient {
    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, DisplayError> {
        let response = self
            .http
            .post(self.predict_url.clone())
            .json(features)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable or unparsable failure body still yields the fallback message.
            let body = response.bytes().await.unwrap_or_default();
            let payload = serde_json::from_slice::<ErrorPayload>(&body).unwrap_or_default();
            return Err(DisplayError::rejected(status.as_u16(), &payload));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<PredictionResult>(&body)
            .map_err(|err| DisplayError::transport(format!("invalid prediction response: {err}")))
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
