//! HTTP front end for the search pipeline.
//!
//! ## Endpoints
//!
//! - `GET /`: liveness message
//! - `POST /search_smk?query=...`: ranked, enriched results as
//!   `{"results": [...]}`; any pipeline failure is a `500` with
//!   `{"detail": "..."}`

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use smk_search::{DefaultPipeline, SearchConfig, SearchError, SearchResponse};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{FinderError, Result};

/// Message returned by the liveness endpoint.
pub const LIVENESS_MESSAGE: &str = "SMK Billedfinder API er live!";

/// Query string of the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Body of the liveness endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure detail.
    pub detail: String,
}

/// A pipeline failure on its way to the caller.
struct ApiError(SearchError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    pipeline: Arc<DefaultPipeline>,
}

/// Running search server.
///
/// Serves in a background tokio task; dropping the handle stops it.
pub struct FinderServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FinderServer {
    /// Build the pipeline from `search` and start serving.
    ///
    /// Binds to `{server.host}:{server.port}` (use port `0` for auto-assign).
    ///
    /// # Errors
    ///
    /// Returns an error if the search config is invalid or the TCP listener
    /// cannot bind.
    pub async fn start(server: &ServerConfig, search: &SearchConfig) -> Result<Self> {
        let pipeline = DefaultPipeline::from_config(search)?;
        Self::start_with(server, pipeline).await
    }

    /// Start serving an already-built pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start_with(server: &ServerConfig, pipeline: DefaultPipeline) -> Result<Self> {
        let app = router(pipeline);

        let bind_addr = format!("{}:{}", server.host, server.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| FinderError::Server(format!("bind to {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| FinderError::Server(format!("failed to get local addr: {e}")))?;

        info!("search server listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("search server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }

    /// Wait for the server task to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the task panicked.
    pub async fn wait(&mut self) -> Result<()> {
        (&mut self.handle).await.or_else(|e| {
            if e.is_cancelled() {
                Ok(())
            } else {
                Err(FinderError::Server(format!("server task failed: {e}")))
            }
        })
    }
}

impl Drop for FinderServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router(pipeline: DefaultPipeline) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    Router::new()
        .route("/", get(handle_root))
        .route("/search_smk", post(handle_search))
        .with_state(state)
}

async fn handle_root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: LIVENESS_MESSAGE.to_owned(),
    })
}

async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> std::result::Result<Json<SearchResponse>, ApiError> {
    match state.pipeline.search(&params.query).await {
        Ok(response) => {
            tracing::debug!(results = response.results.len(), "search served");
            Ok(Json(response))
        }
        Err(err) => {
            tracing::error!(error = %err, "search failed");
            Err(ApiError(err))
        }
    }
}
