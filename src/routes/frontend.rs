//! Serves the gallery front-end from the configured document root.

use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

const INDEX_DOCUMENT: &str = "index.html";

/// Content type for a file, by extension. Unknown extensions are plain text.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    match ext {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" => "image/jpg",
        "gif" => "image/gif",
        _ => "text/plain",
    }
}

/// Maps a request path onto a file beneath `root`. `/` becomes the index
/// document; paths that try to climb out of `root` resolve to nothing.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        INDEX_DOCUMENT
    } else {
        relative
    };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(resolved)
}

pub async fn serve_static(root: &Path, request_path: &str) -> Response {
    let Some(file) = resolve(root, request_path) else {
        return not_found();
    };

    match tokio::fs::read(&file).await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&file))],
            content,
        )
            .into_response(),
        Err(err) if err.kind() == ErrorKind::NotFound => not_found(),
        Err(err) => {
            tracing::error!(error = %err, path = %file.display(), "failed to read static file");
            (StatusCode::INTERNAL_SERVER_ERROR, "500 - Server Error").into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 - File Not Found").into_response()
}
