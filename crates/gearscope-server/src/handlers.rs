//! Request handlers
//!
//! Every failure is reported back to the browser as a notice on the landing
//! page; handlers never return an error status for bad input.

use askama::Template;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use gearscope_core::{ErrorKind, UploadedDataset};
use tracing::{error, info, warn};

use crate::session::{Notice, SessionHandle};
use crate::views::{AnalysisView, IndexView};
use crate::AppState;

pub const NO_FILE_PART: &str = "No file part in the request.";
pub const NO_SELECTED_FILE: &str = "No selected file.";
pub const UPLOAD_OK: &str = "File uploaded successfully!";
pub const UPLOAD_FIRST: &str = "Please upload a CSV file first.";

const FILE_FIELD: &str = "file";

/// `GET /`
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = state.sessions.resolve(&headers);
    let view = IndexView {
        notices: state.sessions.take_notices(session.id),
        current_label: state
            .sessions
            .dataset(session.id)
            .map(|d| d.label().to_string()),
    };
    with_cookie(session, render(&view))
}

/// `POST /upload`
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let session = state.sessions.resolve(&headers);
    let notice = match multipart {
        Ok(multipart) => receive_upload(&state, session, multipart).await,
        Err(rejection) => {
            warn!(%rejection, "upload without multipart body");
            Notice::error(NO_FILE_PART)
        }
    };
    state.sessions.push_notice(session.id, notice);
    with_cookie(session, Redirect::to("/").into_response())
}

async fn receive_upload(state: &AppState, session: SessionHandle, mut multipart: Multipart) -> Notice {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FILE_FIELD) => break field,
            Ok(Some(_)) => continue,
            Ok(None) => return Notice::error(NO_FILE_PART),
            Err(e) => {
                warn!(error = %e, "malformed multipart body");
                return Notice::error(format!("Error reading file: {e}"));
            }
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    if filename.trim().is_empty() {
        return Notice::error(NO_SELECTED_FILE);
    }

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, filename = %filename, "failed to read upload body");
            return Notice::error(format!("Error reading file: {e}"));
        }
    };

    let schema = state.pipeline.schema().clone();
    let parsed = tokio::task::spawn_blocking(move || {
        UploadedDataset::from_upload(&filename, &bytes, &schema)
    })
    .await;

    match parsed {
        Ok(Ok(dataset)) => {
            info!(session = %session.id, label = dataset.label(), "stored upload");
            state.sessions.replace_dataset(session.id, dataset);
            Notice::success(UPLOAD_OK)
        }
        Ok(Err(e)) => {
            warn!(session = %session.id, error = %e, "rejected upload");
            Notice::error(format!("Error reading file: {e}"))
        }
        Err(e) => {
            error!(error = %e, "upload parsing task failed");
            Notice::error(format!("Error reading file: {e}"))
        }
    }
}

/// `GET /analyze`
pub async fn analyze(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = state.sessions.resolve(&headers);
    let dataset = state.sessions.dataset(session.id);

    let pipeline = state.pipeline.clone();
    let reference = state.reference.clone();
    let outcome =
        tokio::task::spawn_blocking(move || pipeline.run(&reference, dataset.as_deref())).await;

    let notice = match outcome {
        Ok(Ok(report)) => return with_cookie(session, render(&AnalysisView::from(report))),
        Ok(Err(e)) if e.kind() == ErrorKind::NoData => Notice::error(UPLOAD_FIRST),
        Ok(Err(e)) => {
            warn!(session = %session.id, error = %e, "analysis failed");
            Notice::error(format!("Analysis failed: {e}"))
        }
        Err(e) => {
            error!(error = %e, "analysis task failed");
            Notice::error("Analysis failed: internal error")
        }
    };
    state.sessions.push_notice(session.id, notice);
    with_cookie(session, Redirect::to("/").into_response())
}

fn render<T: Template>(view: &T) -> Response {
    match view.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template rendering failed").into_response()
        }
    }
}

fn with_cookie(session: SessionHandle, mut response: Response) -> Response {
    if let Some(cookie) = session.set_cookie() {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => error!(error = %e, "invalid session cookie"),
        }
    }
    response
}
