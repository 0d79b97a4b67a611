use axum::Router;

use crate::state::AppState;

pub mod categories;
pub mod dashboard;
pub mod doc;
pub mod health;
pub mod orders;
pub mod products;
pub mod session;
pub mod sync;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/dashboard", dashboard::router())
        .nest("/session", session::router())
        .nest("/sync", sync::router())
}
