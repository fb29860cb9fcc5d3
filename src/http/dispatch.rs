use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::error::ServeError;
use crate::feed::{build_feed, rss};
use crate::http::request_path::{decompose, RequestPath};
use crate::http::state::AppState;
use crate::http::static_files;
use crate::identity::ServerIdentity;
use crate::media::metadata::load_folder_metadata;

/// GET/HEAD on any path: a feed for `<folder>.rss`, otherwise the file itself.
pub async fn dispatch(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    tracing::info!("requested path: {}", uri.path());

    let result = match decompose(uri.path(), state.identity.path_prefix()) {
        Some(RequestPath::Feed { folder }) => serve_feed(Arc::clone(&state.identity), folder).await,
        Some(RequestPath::Asset { path }) => serve_asset(&state.identity, &path, &headers).await,
        None => Err(ServeError::NotFound),
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

async fn serve_feed(identity: Arc<ServerIdentity>, folder: String) -> Result<Response, ServeError> {
    // No aggregate feed for the root.
    if folder.is_empty() {
        tracing::debug!("Feed requested without a folder name");
        return Err(ServeError::NotFound);
    }
    let folder_path = identity
        .media_root()
        .resolve(&folder)
        .into_path()
        .ok_or(ServeError::NotFound)?;
    if folder_path == identity.media_root().path() {
        tracing::debug!("Feed for {:?} resolves to the media root", folder);
        return Err(ServeError::NotFound);
    }

    let xml = tokio::task::spawn_blocking(move || synthesize(&identity, &folder, folder_path))
        .await
        .map_err(|e| ServeError::Internal(format!("feed task failed: {e}")))??;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        xml,
    )
        .into_response())
}

/// Blocking part of a feed request: stat, sidecar, listing, serialization.
fn synthesize(
    identity: &ServerIdentity,
    folder: &str,
    folder_path: PathBuf,
) -> Result<String, ServeError> {
    if !folder_path.is_dir() {
        tracing::debug!("No folder at {}", folder_path.display());
        return Err(ServeError::NotFound);
    }
    tracing::info!("folder_path: {}", folder_path.display());

    let metadata = load_folder_metadata(&folder_path, folder);
    let feed = build_feed(identity, folder, &folder_path, &metadata).map_err(|e| {
        tracing::warn!("Cannot list {}: {}", folder_path.display(), e);
        ServeError::NotFound
    })?;
    Ok(rss::render(&feed))
}

async fn serve_asset(
    identity: &ServerIdentity,
    path: &str,
    headers: &HeaderMap,
) -> Result<Response, ServeError> {
    let file_path = identity
        .media_root()
        .resolve(path)
        .into_path()
        .ok_or(ServeError::NotFound)?;
    static_files::serve_file(&file_path, headers).await
}
