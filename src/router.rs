use crate::domain::{FormDefaults, PropertyAttributes, ValidationError};
use crate::errors::ServerError;
use crate::estimator::{Estimator, RngSource};
use crate::predictor::wire::{ErrorResponse, PredictResponse};
use crate::predictor::{FallbackPolicy, LocalPredictor};
use crate::responses::{
    html_response, html_response_with_status, json_response, redirect, see_other, ResultResp,
};
use crate::session::{session_cookie, session_token, SessionData, SessionStore};
use crate::templates::pages::{self, PredictForm, ResultsVm};
use astra::Request;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Form and JSON bodies are tiny; anything bigger is refused.
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Shared by every worker thread.
pub struct AppState {
    pub policy: FallbackPolicy,
    pub sessions: SessionStore,
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/about") => html_response(pages::about_page()),
        ("GET", "/predict") => predict_form(&req, state),
        ("POST", "/predict") => {
            let body = read_body(&mut req)?;
            submit_prediction(&req, &body, state)
        }
        ("GET", "/results") => results(&req, state),
        ("POST", "/api/predict") => {
            let body = read_body(&mut req)?;
            api_predict(&body)
        }
        ("GET", "/health") => json_response(200, &serde_json::json!({ "status": "healthy" })),
        _ => Err(ServerError::NotFound),
    }
}

fn predict_form(req: &Request, state: &AppState) -> ResultResp {
    let defaults = load_session(req, state)
        .and_then(|s| s.house_data)
        .map(|house| FormDefaults::from(&house))
        .unwrap_or_default();

    let estimator = Estimator::today_local();
    html_response(pages::predict_page(
        &PredictForm::from(&defaults),
        None,
        estimator.current_year(),
    ))
}

fn submit_prediction(req: &Request, body: &str, state: &AppState) -> ResultResp {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    let fields = || pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()));

    let estimator = Estimator::today_local();
    let mut rng = RngSource::thread();

    let outcome = PropertyAttributes::from_form(fields()).and_then(|attrs| {
        let prediction = state.policy.predict(&attrs, &estimator, &mut rng)?;
        Ok((attrs, prediction))
    });

    let (house, prediction) = match outcome {
        Ok(done) => done,
        Err(err) => {
            info!(field = err.field, message = %err.message, "rejected form submission");
            return invalid_form(&PredictForm::from_pairs(fields()), &err, &estimator);
        }
    };

    info!(
        price = prediction.estimate.predicted_price,
        source = ?prediction.source,
        "prediction made"
    );

    let now = now_unix();
    let token = state.sessions.save(
        session_token(req).as_deref(),
        now,
        SessionData {
            house_data: Some(house),
            prediction: Some(prediction),
        },
    );
    debug!(active_sessions = state.sessions.len(now), "session saved");

    see_other(
        "/results",
        Some(&session_cookie(&token, state.sessions.ttl_secs())),
    )
}

fn invalid_form(form: &PredictForm, err: &ValidationError, estimator: &Estimator) -> ResultResp {
    html_response_with_status(
        400,
        pages::predict_page(form, Some(err), estimator.current_year()),
    )
}

fn results(req: &Request, state: &AppState) -> ResultResp {
    let session = load_session(req, state).unwrap_or_default();
    let (Some(house), Some(prediction)) = (&session.house_data, &session.prediction) else {
        debug!("no prediction in session, sending back to the form");
        return redirect("/predict");
    };

    html_response(pages::results_page(&ResultsVm {
        house,
        prediction,
        current_year: Estimator::today_local().current_year(),
    }))
}

/// JSON counterpart of the form. Always answers with the local model.
fn api_predict(body: &str) -> ResultResp {
    let attrs: PropertyAttributes = match serde_json::from_str(body) {
        Ok(attrs) => attrs,
        Err(e) => {
            return json_response(
                400,
                &ErrorResponse {
                    error: format!("invalid request body: {e}"),
                },
            )
        }
    };

    let estimator = Estimator::today_local();
    match LocalPredictor.estimate(&attrs, &estimator, &mut RngSource::thread()) {
        Ok(est) => json_response(200, &PredictResponse::from(&est)),
        Err(e) => json_response(
            400,
            &ErrorResponse {
                error: e.to_string(),
            },
        ),
    }
}

fn load_session(req: &Request, state: &AppState) -> Option<SessionData> {
    let token = session_token(req)?;
    state.sessions.load(&token, now_unix())
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    if bytes.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest(format!(
            "request body larger than {MAX_BODY_BYTES} bytes"
        )));
    }
    String::from_utf8(bytes)
        .map_err(|_| ServerError::BadRequest("request body is not valid UTF-8".into()))
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
