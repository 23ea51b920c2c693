//! Catalog HTTP server.
//!
//! Exposes the catalog as a JSON API for browser clients. The catalog is
//! immutable, so every handler is a read that borrows shared state; the
//! search and suggestion endpoints delegate straight to the core engines.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/health` | Health check (returns version) |
//! | `GET`  | `/products` | Full catalog in store order |
//! | `GET`  | `/products/{id}` | One product by id |
//! | `GET`  | `/search?q=` | Filtered products; empty `q` returns everything |
//! | `GET`  | `/suggest?q=` | Up to 3 suggestions; empty `q` returns none |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "not_found", "message": "product not found: 42" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a browser-hosted
//! catalog UI can call the API directly.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use datacat_core::{filter, suggest, Catalog, Product, Suggestion};

use crate::config::Config;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
}

/// Starts the catalog HTTP server.
///
/// Binds to the address configured in `[server].bind` and serves until
/// the process is terminated.
pub async fn run_server(config: &Config, catalog: Catalog) -> anyhow::Result<()> {
    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let product_count = state.catalog.len();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/products", get(handle_products))
        .route("/products/{id}", get(handle_product))
        .route("/search", get(handle_search))
        .route("/suggest", get(handle_suggest))
        .layer(cors)
        .with_state(state);

    log::info!(
        "serving {} products on {}",
        product_count,
        config.server.bind
    );
    println!("Catalog server listening on http://{}", config.server.bind);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (`"bad_request"`, `"not_found"`).
    code: String,
    /// Human-readable error message.
    message: String,
}

/// Internal error type that converts into an HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /products ============

async fn handle_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.all().to_vec())
}

// ============ GET /products/{id} ============

async fn handle_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id: u32 = id
        .parse()
        .map_err(|_| bad_request(format!("invalid product id: {}", id)))?;

    match state.catalog.by_id(id) {
        Some(product) => Ok(Json(product.clone())),
        None => Err(not_found(format!("product not found: {}", id))),
    }
}

// ============ GET /search ============

/// Query string for `/search` and `/suggest`. A missing `q` is treated
/// as empty, which the core maps to "everything" / "nothing".
#[derive(Deserialize)]
struct QueryParams {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    count: usize,
    results: Vec<Product>,
}

async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<SearchResponse> {
    let results: Vec<Product> = filter(&state.catalog, &params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(SearchResponse {
        count: results.len(),
        query: params.q,
        results,
    })
}

// ============ GET /suggest ============

#[derive(Serialize)]
struct SuggestResponse {
    query: String,
    suggestions: Vec<Suggestion>,
}

async fn handle_suggest(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<SuggestResponse> {
    let suggestions = suggest(&state.catalog, &params.q);
    Json(SuggestResponse {
        query: params.q,
        suggestions,
    })
}
