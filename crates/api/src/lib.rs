//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for wallets
//! - Admission control bounding concurrent wallet operations
//! - Mapping of wallet outcomes to HTTP responses

pub mod error;
pub mod gateway;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use walletd_core::wallet::{LedgerStore, WalletService};

pub use error::ApiError;
pub use gateway::{AdmissionGate, GatewayError};

/// Wallet service over a type-erased ledger store.
pub type SharedWalletService = WalletService<Arc<dyn LedgerStore>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Wallet business logic.
    pub wallets: Arc<SharedWalletService>,
    /// Admission gate for wallet operations.
    pub gate: Arc<AdmissionGate>,
}

impl AppState {
    /// Builds state from a ledger store and an admission gate.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, gate: AdmissionGate) -> Self {
        Self {
            wallets: Arc::new(WalletService::new(store)),
            gate: Arc::new(gate),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
