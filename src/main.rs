use crate::config::AppConfig;
use crate::predictor::FallbackPolicy;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use crate::session::SessionStore;
use astra::Server;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod domain;
mod errors;
mod estimator;
mod format;
mod predictor;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let policy = match FallbackPolicy::from_config(&cfg.predictor) {
        Ok(policy) => policy,
        Err(e) => {
            error!("could not set up the prediction service client: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        policy,
        sessions: SessionStore::new(cfg.session_ttl_secs),
    };

    info!(
        addr = %cfg.addr,
        workers = cfg.max_workers,
        remote = state.policy.has_remote(),
        "starting server"
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
