//! Read-only inventory snapshot endpoint.
//!
//! Loads the inventory sheet export(s), builds a snapshot with
//! `foam-inventory`, and either prints the payload once or serves it over
//! HTTP. The payload is rebuilt from the sheets on every request: the
//! boundary is stateless, and the browser client layers its own caching
//! (and offline fallback) above it.
//!
//! The endpoint always answers 200 with a tagged body; `success` in the
//! payload tells the client whether it got a snapshot or an error.

use anyhow::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use foam_inventory::sheet::load_sheet_file;
use foam_inventory::snapshot::build_snapshot;
use foam_inventory::ApiResponse;

#[derive(Parser, Debug)]
#[command(
    name = "foam-inventory-server",
    about = "Café inventory snapshot endpoint"
)]
struct Args {
    /// CSV export of the main inventory sheet (在庫管理)
    main: String,

    /// CSV export of the storage-location sheet (在庫管理場所)
    #[arg(long)]
    storage: Option<String>,

    /// Serve over HTTP instead of printing the payload once
    #[arg(long)]
    serve: bool,

    /// Port for --serve
    #[arg(long, default_value_t = 8787)]
    port: u16,

    /// Pretty-print the one-shot JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone)]
struct AppState {
    main_path: String,
    storage_path: Option<String>,
}

/// Build one response from the current sheet contents.
///
/// Only a main-sheet read failure produces the error payload. The storage
/// sheet is optional: a missing or unreadable export means no storage
/// records, not a failed request.
fn build_response(state: &AppState) -> ApiResponse {
    let main_rows = match load_sheet_file(&state.main_path) {
        Ok(rows) => rows,
        Err(err) => return ApiResponse::from(Err(err)),
    };

    let storage_rows = match state.storage_path.as_deref() {
        Some(path) => load_sheet_file(path).unwrap_or_else(|err| {
            warn!(path, error = %err, "storage sheet unreadable, omitting storage records");
            Vec::new()
        }),
        None => Vec::new(),
    };

    ApiResponse::Snapshot(build_snapshot(&main_rows, &storage_rows))
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// GET /api/inventory
async fn get_inventory(State(state): State<AppState>) -> Json<ApiResponse> {
    Json(build_response(&state))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    module: String,
    version: String,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "foam-inventory-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/inventory", get(get_inventory))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        // The handbook front-end is a static page on another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let state = AppState {
        main_path: args.main,
        storage_path: args.storage,
    };

    if !args.serve {
        let response = build_response(&state);
        let json = if args.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        println!("{json}");
        return Ok(());
    }

    info!(
        "Starting foam-inventory-server v{} (main sheet: {})",
        env!("CARGO_PKG_VERSION"),
        state.main_path
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!(
        "inventory endpoint on http://0.0.0.0:{}/api/inventory",
        args.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN_FIXTURE: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../foam-inventory/fixtures/sample_inventory.csv");
    const STORAGE_FIXTURE: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../foam-inventory/fixtures/sample_storage.csv");

    #[test]
    fn response_from_fixtures_is_a_snapshot() {
        let state = AppState {
            main_path: MAIN_FIXTURE.to_string(),
            storage_path: Some(STORAGE_FIXTURE.to_string()),
        };
        let value = serde_json::to_value(build_response(&state)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["summary"]["totalItems"], 13);
        assert_eq!(value["storage"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn missing_main_sheet_yields_error_payload() {
        let state = AppState {
            main_path: "/nonexistent/在庫管理.csv".to_string(),
            storage_path: None,
        };
        let value = serde_json::to_value(build_response(&state)).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error"].is_string());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn missing_storage_sheet_is_not_fatal() {
        let state = AppState {
            main_path: MAIN_FIXTURE.to_string(),
            storage_path: Some("/nonexistent/在庫管理場所.csv".to_string()),
        };
        let value = serde_json::to_value(build_response(&state)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["storage"].as_array().unwrap().len(), 0);
    }
}
