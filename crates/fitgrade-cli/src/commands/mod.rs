pub mod calendar;
pub mod config;
pub mod daily;
pub mod grade;
pub mod weekly;

use std::error::Error;
use std::future::Future;
use std::path::Path;

use fitgrade_core::{Config, CoreError, Dashboard, HttpStatsSource, Loadable};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Run `future` to completion on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

/// Dashboard backed by the configured endpoint and session.
fn dashboard(config: &Config) -> Result<Dashboard<HttpStatsSource>, CoreError> {
    let source = HttpStatsSource::new(&config.api.base_url, config.timeout())?;
    Ok(Dashboard::new(source, config.session()))
}

/// Read a saved backend response body.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&content).map_err(CoreError::from)?)
}

/// Unwrap a ready panel, or report why there is nothing to show.
///
/// "No data" is a normal outcome and prints its message; a configuration
/// problem is an error.
fn ready_or_report<T>(loaded: Loadable<T>) -> Result<Option<T>, Box<dyn Error>> {
    match loaded {
        Loadable::Ready(value) => Ok(Some(value)),
        Loadable::NoData { message } => {
            println!("{message}");
            Ok(None)
        }
        Loadable::ConfigurationError { message } => Err(message.into()),
    }
}

/// Print a panel as JSON. A configuration problem still fails the command.
fn print_json<T: Serialize>(loaded: &Loadable<T>) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(loaded)?);
    match loaded {
        Loadable::ConfigurationError { message } => Err(message.clone().into()),
        _ => Ok(()),
    }
}
