//! Endpoint for listing expenses.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    expense::{ExpenseState, get_expenses_with_category},
};

/// Respond with all expenses that have a known category, newest first.
///
/// Failures are reported as a 500 with the error message as plain text.
pub async fn get_expenses_endpoint(State(state): State<ExpenseState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_expenses_with_category(&connection) {
        Ok(expenses) => Json(expenses).into_response(),
        Err(error) => error.into_response(),
    }
}
