//! HTTP transport for the analysis dispatcher.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use snipcheck_core::api::AnalysisDispatcher;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AnalysisDispatcher>,
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(dispatcher: Arc<AnalysisDispatcher>, shutdown_tx: broadcast::Sender<()>) -> Self {
        Self {
            dispatcher,
            shutdown_tx,
        }
    }
}
