//! Árbol de rutas de la API

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

pub mod company_routes;
pub mod industry_routes;
pub mod invoice_routes;
pub mod system_routes;

/// Construye el router completo con sus capas
pub fn build_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(system_routes::health))
        .nest("/companies", company_routes::create_company_router())
        .nest("/industries", industry_routes::create_industry_router())
        .nest("/invoices", invoice_routes::create_invoice_router())
        .fallback(system_routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
