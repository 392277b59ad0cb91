//! HTTP front end for gearscope
//!
//! Routes:
//! - `GET /` landing page with the upload form and pending notices
//! - `POST /upload` multipart upload of a sensor CSV (`file` field)
//! - `GET /analyze` comparison of the session's upload against the reference
//!
//! Uploads are kept per browser session; see [`session`].

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use gearscope_analysis::AnalysisPipeline;
use gearscope_core::{SensorSchema, Table};
use gearscope_viz::{ChartRenderer, PlottersRenderer};
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod session;
pub mod views;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use session::{Notice, NoticeLevel, SessionId, SessionStore, SESSION_COOKIE};

/// Renderer shared by all requests
pub type SharedRenderer = Arc<dyn ChartRenderer>;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub reference: Arc<Table>,
    pub pipeline: Arc<AnalysisPipeline<SharedRenderer>>,
    pub sessions: Arc<SessionStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        reference: Table,
        pipeline: AnalysisPipeline<SharedRenderer>,
        max_sessions: usize,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            reference: Arc::new(reference),
            pipeline: Arc::new(pipeline),
            sessions: Arc::new(SessionStore::new(max_sessions)),
            max_upload_bytes,
        }
    }

    /// Load the reference recording and build the plotters-backed pipeline
    ///
    /// # Errors
    /// Fails if the reference file is missing, malformed, or lacks a required
    /// column, or if the chart size is invalid.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let reference = load_reference(config)?;
        let renderer = PlottersRenderer::new(config.chart_width, config.chart_height)?;
        let pipeline = AnalysisPipeline::new(Arc::new(renderer) as SharedRenderer);
        Ok(Self::new(
            reference,
            pipeline,
            config.max_sessions,
            config.max_upload_bytes,
        ))
    }
}

fn load_reference(config: &ServerConfig) -> Result<Table> {
    let path = &config.reference_csv;
    let wrap = |source| Error::Reference {
        path: path.clone(),
        source,
    };
    let table = Table::from_path(path).map_err(wrap)?;
    SensorSchema::default()
        .validate(&table)
        .map_err(wrap)?;
    info!(path = %path.display(), rows = table.height(), "loaded reference dataset");
    Ok(table)
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/analyze", get(handlers::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
