// Preview Server Module
//
// Purpose: serve a site directory with every HTML page rendered on request.
// Non-HTML files (data/, images, css) are served as-is.

#[cfg(feature = "api")]
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower::ServiceExt;

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use std::path::PathBuf;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::config::SiteConfig;

#[cfg(feature = "api")]
use crate::loader::DirSource;

#[cfg(feature = "api")]
use crate::site::SiteRenderer;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<SiteRenderer>,
    /// Page files, addressed by request path
    pub pages: Arc<DirSource>,
    pub site_dir: PathBuf,
    /// Rendered HTML by page path
    pub cache: Cache<String, String>,
}

#[cfg(feature = "api")]
impl AppState {
    pub async fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Preparing site renderer...");
        let renderer = Arc::new(SiteRenderer::from_config(config)?);

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(1_000) // 1K pages
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            renderer,
            pages: Arc::new(DirSource::new(config.site_dir.clone())),
            site_dir: config.site_dir.clone(),
            cache,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Everything else: rendered pages or static files
        .fallback(serve_site)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn serve_site(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    match page_path(&path) {
        Some(page) => render_page(&state, page).await.map(IntoResponse::into_response),
        None => ServeDir::new(&state.site_dir)
            .oneshot(request)
            .await
            .map(IntoResponse::into_response)
            .map_err(|e| AppError::Internal(format!("Static file error: {}", e))),
    }
}

/// Page path for HTML requests; `None` for static assets
#[cfg(feature = "api")]
fn page_path(path: &str) -> Option<String> {
    if path.is_empty() || path.ends_with('/') {
        return Some(format!("{}index.html", if path.is_empty() { "/" } else { path }));
    }
    let is_html = path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("html"));
    is_html.then(|| path.to_string())
}

#[cfg(feature = "api")]
async fn render_page(state: &AppState, page: String) -> Result<Html<String>, AppError> {
    // Check cache
    if let Some(cached) = state.cache.get(&page).await {
        tracing::debug!("Cache hit for page {}", page);
        return Ok(Html(cached));
    }

    let file = state.pages.file_path(&page);
    let source = match tokio::fs::read_to_string(&file).await {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("Page {} not found", page)));
        }
        Err(e) => return Err(AppError::Internal(format!("Failed to read {}: {}", page, e))),
    };

    // Fresh loader per request
    tracing::debug!("Rendering page {}", page);
    let rendered = state
        .renderer
        .render_page(&page, &source)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Cache result
    state.cache.insert(page, rendered.html.clone()).await;

    Ok(Html(rendered.html))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    Internal(String),
    NotFound(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(all(test, feature = "api"))]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_routing() {
        assert_eq!(page_path("/").as_deref(), Some("/index.html"));
        assert_eq!(page_path("/work/").as_deref(), Some("/work/index.html"));
        assert_eq!(page_path("/work/atlas.html").as_deref(), Some("/work/atlas.html"));
        assert_eq!(page_path("/data/projects.json"), None);
        assert_eq!(page_path("/css/site.css"), None);
    }
}
