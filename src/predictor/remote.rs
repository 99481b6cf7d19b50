// src/predictor/remote.rs
use crate::domain::{PriceEstimate, PropertyAttributes};
use crate::estimator::{Estimator, RandomSource};
use crate::predictor::wire::RemoteResponse;
use crate::predictor::{PricePredictor, PredictorError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("housewise/", env!("CARGO_PKG_VERSION"));

/// Asks an external `/predict` service for the valuation.
pub struct RemotePredictor {
    client: Client,
    predict_url: String,
}

impl RemotePredictor {
    pub fn new(predict_url: impl Into<String>, timeout: Duration) -> Result<Self, PredictorError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            predict_url: predict_url.into(),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

impl PricePredictor for RemotePredictor {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn predict(
        &self,
        attrs: &PropertyAttributes,
        local: &Estimator,
        rng: &mut dyn RandomSource,
    ) -> Result<PriceEstimate, PredictorError> {
        attrs.validate(local.current_year())?;

        debug!(url = %self.predict_url, "requesting remote prediction");

        let resp = self
            .client
            .post(&self.predict_url)
            .header("Content-Type", "application/json")
            .json(attrs)
            .send()
            .map_err(|e| PredictorError::Transport(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(PredictorError::Transport(format!(
                "prediction service error: {status} - {text}"
            )));
        }

        let body: RemoteResponse = resp
            .json()
            .map_err(|e| PredictorError::Transport(format!("undecodable response: {e}")))?;

        body.into_estimate(attrs, local, rng)
    }
}
