// src/predictor/mod.rs
//
// Who answers a valuation request: an external service, the local formula,
// or the external service with the local formula as a safety net.

pub mod remote;
pub mod wire;

pub use remote::RemotePredictor;

use crate::config::PredictorConfig;
use crate::domain::{PriceEstimate, Prediction, PredictionSource, PropertyAttributes, ValidationError};
use crate::estimator::{Estimator, RandomSource};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const FALLBACK_NOTICE: &str =
    "Failed to connect to prediction service. Using local fallback model.";

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("prediction service unavailable: {0}")]
    Transport(String),
}

/// Anything that can turn attributes into an estimate.
/// `local` carries today's date for age and trend labels.
pub trait PricePredictor: Send + Sync {
    fn name(&self) -> &'static str;

    fn predict(
        &self,
        attrs: &PropertyAttributes,
        local: &Estimator,
        rng: &mut dyn RandomSource,
    ) -> Result<PriceEstimate, PredictorError>;
}

/// The formula in `estimator`, in-process.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPredictor;

impl LocalPredictor {
    pub fn estimate(
        &self,
        attrs: &PropertyAttributes,
        local: &Estimator,
        rng: &mut dyn RandomSource,
    ) -> Result<PriceEstimate, ValidationError> {
        local.estimate(attrs, rng)
    }
}

impl PricePredictor for LocalPredictor {
    fn name(&self) -> &'static str {
        "local"
    }

    fn predict(
        &self,
        attrs: &PropertyAttributes,
        local: &Estimator,
        rng: &mut dyn RandomSource,
    ) -> Result<PriceEstimate, PredictorError> {
        Ok(self.estimate(attrs, local, rng)?)
    }
}

/// Caller-side choice between remote and local. Tries the remote predictor
/// once when one is configured and answers locally if it is unavailable.
pub struct FallbackPolicy {
    remote: Option<Box<dyn PricePredictor>>,
    local: LocalPredictor,
}

impl FallbackPolicy {
    pub fn local_only() -> Self {
        Self {
            remote: None,
            local: LocalPredictor,
        }
    }

    pub fn with_remote(remote: impl PricePredictor + 'static) -> Self {
        Self {
            remote: Some(Box::new(remote)),
            local: LocalPredictor,
        }
    }

    pub fn from_config(cfg: &PredictorConfig) -> Result<Self, PredictorError> {
        match &cfg.predict_url {
            Some(url) => {
                let remote =
                    RemotePredictor::new(url.clone(), Duration::from_secs(cfg.timeout_secs))?;
                info!(url = remote.predict_url(), "remote prediction service enabled");
                Ok(Self::with_remote(remote))
            }
            None => {
                info!("no remote prediction service configured, using local model");
                Ok(Self::local_only())
            }
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Invalid input is rejected before anything is sent anywhere.
    pub fn predict(
        &self,
        attrs: &PropertyAttributes,
        local: &Estimator,
        rng: &mut dyn RandomSource,
    ) -> Result<Prediction, ValidationError> {
        attrs.validate(local.current_year())?;

        let Some(remote) = &self.remote else {
            return Ok(Prediction::local(self.local.estimate(attrs, local, rng)?));
        };

        match remote.predict(attrs, local, rng) {
            Ok(estimate) => Ok(Prediction {
                estimate,
                source: PredictionSource::Remote,
                notice: None,
            }),
            Err(PredictorError::Validation(e)) => Err(e),
            Err(PredictorError::Transport(reason)) => {
                warn!(predictor = remote.name(), %reason, "falling back to local model");
                let estimate = self.local.estimate(attrs, local, rng)?;
                Ok(Prediction {
                    estimate,
                    source: PredictionSource::LocalFallback,
                    notice: Some(FALLBACK_NOTICE.to_string()),
                })
            }
        }
    }
}
