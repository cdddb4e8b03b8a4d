//! Shared state for the expense endpoints.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

/// The state needed by the expense endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
