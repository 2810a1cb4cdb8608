//! server::handlers
//!
//! Request handlers and error-to-status mapping.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::browse::{BrowseError, Browser};
use crate::core::types::{Oid, RepoName};
use crate::store::StoreError;

use super::render;

/// A request failure mapped to an HTTP status.
///
/// Typed absences become 404s, malformed parameters 400s, and store I/O
/// failures 500s. The body is a short plain-text message; internals are
/// logged, not leaked.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl From<BrowseError> for ApiError {
    fn from(err: BrowseError) -> Self {
        match err {
            BrowseError::UnknownRepo { name } => {
                ApiError::NotFound(format!("unknown repository: {}", name))
            }
            BrowseError::Store(store) => match store {
                StoreError::PathNotFound { path } => {
                    ApiError::NotFound(format!("file not found: {}", path))
                }
                StoreError::ObjectNotFound { oid } => {
                    ApiError::NotFound(format!("no such object: {}", oid))
                }
                StoreError::RefNotFound { refname } => {
                    ApiError::NotFound(format!("no such ref: {}", refname))
                }
                StoreError::InvalidOid { oid } => {
                    ApiError::BadRequest(format!("invalid object id: {}", oid))
                }
                other => ApiError::Internal(other.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Internal(message) => {
                error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// Run a blocking browse operation on the blocking pool.
async fn blocking<T, F>(op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| ApiError::Internal(format!("worker failed: {}", e)))?
}

/// `GET /` - the HTML index of all repositories.
pub async fn index(State(browser): State<Arc<Browser>>) -> Result<Html<String>, ApiError> {
    let listings = blocking(move || Ok(browser.browse_index())).await?;
    Ok(Html(render::index_page(&listings)))
}

/// `GET /repo/{repo}/file/{path}` - file content, markdown rendered.
pub async fn file(
    State(browser): State<Arc<Browser>>,
    Path((repo, path)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let name = parse_repo(&repo)?;
    let at = match params.get("at") {
        Some(raw) => Some(
            Oid::new(raw.clone())
                .map_err(|_| ApiError::BadRequest(format!("invalid commit id: {}", raw)))?,
        ),
        None => None,
    };

    let requested = path.clone();
    let bytes = blocking(move || {
        browser
            .read_file(&name, &path, at.as_ref())
            .map_err(ApiError::from)
    })
    .await?;

    if render::is_markdown(&requested) {
        let source = String::from_utf8_lossy(&bytes);
        return Ok(Html(render::render_markdown(&source)).into_response());
    }

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        bytes,
    )
        .into_response())
}

/// `GET /repo/{repo}/history/{path}` - revision groups as JSON.
pub async fn history(
    State(browser): State<Arc<Browser>>,
    Path((repo, path)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let name = parse_repo(&repo)?;

    let groups =
        blocking(move || browser.file_history(&name, &path).map_err(ApiError::from)).await?;

    Ok(Json(groups).into_response())
}

fn parse_repo(raw: &str) -> Result<RepoName, ApiError> {
    RepoName::new(raw).map_err(|_| ApiError::NotFound(format!("unknown repository: {}", raw)))
}
