//! Application router configuration.

use std::path::Path;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    category::get_categories_endpoint,
    endpoints,
    expense::{create_expense_endpoint, get_expenses_endpoint},
};

/// Return a router with all the app's routes.
///
/// Requests that do not match an API route are served from `assets_dir`.
/// Directory requests (including the root) serve the directory's `index.html`.
///
/// Request bodies are not size limited.
pub fn build_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(endpoints::CATEGORIES_API, get(get_categories_endpoint))
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses_endpoint).post(create_expense_endpoint),
        )
        .fallback_service(ServeDir::new(assets_dir))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
