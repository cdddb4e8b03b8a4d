//! Endpoint for listing categories.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, category::get_all_categories};

/// The state needed for listing categories.
#[derive(Debug, Clone)]
pub struct CategoriesState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Respond with every category as a JSON array of `{id, name}` objects.
///
/// Failures are reported as a 500 with the error message as plain text.
pub async fn get_categories_endpoint(State(state): State<CategoriesState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_all_categories(&connection) {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => error.into_response(),
    }
}
