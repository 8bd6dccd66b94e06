use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod dashboard;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let dashboard = match Dashboard::load(&config) {
        Ok(dashboard) => Arc::new(dashboard),
        Err(e) => {
            error!(error = %e, "failed to load dashboard data");
            return Err(e.into());
        }
    };

    info!(addr = %config.addr, workers = config.workers, "starting server");
    let server = Server::bind(config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &dashboard) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        return Err(e.into());
    }

    info!("server shut down cleanly");
    Ok(())
}
