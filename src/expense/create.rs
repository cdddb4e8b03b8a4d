//! Endpoint for adding an expense.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    Error,
    expense::{ExpenseState, create_expense, parse_new_expense},
};

/// Store the expense described by the JSON request body.
///
/// Responds with 201 and `{"status": "success"}` once the expense is stored.
/// Malformed bodies and database errors both produce a 500 with
/// `{"status": "error", "message": "..."}`.
///
/// The body is read as raw bytes, the content type header is not checked.
pub async fn create_expense_endpoint(State(state): State<ExpenseState>, body: Bytes) -> Response {
    let new_expense = match parse_new_expense(&body) {
        Ok(new_expense) => new_expense,
        Err(error) => return Error::from(error).into_json_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_json_response();
        }
    };

    match create_expense(&new_expense, &connection) {
        Ok(id) => {
            tracing::debug!("Created expense {id}");
            (StatusCode::CREATED, Json(json!({"status": "success"}))).into_response()
        }
        Err(error) => error.into_json_response(),
    }
}

#[cfg(test)]
mod create_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Bytes,
        extract::State,
        http::{StatusCode, header::CONTENT_TYPE},
    };
    use rusqlite::Connection;
    use serde_json::Value;

    use crate::{
        category::{CategoryName, create_category},
        db::initialize,
        expense::{ExpenseState, ExpenseView, create_expense_endpoint, get_expenses_with_category},
        test_utils::{get_header, poison_lock, read_body_text},
    };

    fn get_expense_state() -> ExpenseState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");
        create_category(CategoryName::new_unchecked("Food"), &connection)
            .expect("Could not create test category");

        ExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    async fn read_json(response: axum::response::Response) -> Value {
        serde_json::from_str(&read_body_text(response).await).expect("Body is not JSON")
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_expense_state();
        let body = Bytes::from_static(
            br#"{"amount":12.5,"description":"Coffee","date":"2024-01-01","category_id":1}"#,
        );

        let response = create_expense_endpoint(State(state.clone()), body).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            get_header(&response, CONTENT_TYPE.as_str()),
            "application/json"
        );
        assert_eq!(
            read_json(response).await,
            serde_json::json!({"status": "success"})
        );
        assert_eq!(
            get_expenses_with_category(&state.db_connection.lock().unwrap()),
            Ok(vec![ExpenseView {
                id: 1,
                amount: 12.5,
                description: "Coffee".to_owned(),
                date: "2024-01-01".to_owned(),
                category_name: "Food".to_owned(),
            }])
        );
    }

    #[tokio::test]
    async fn malformed_json_returns_json_error() {
        let state = get_expense_state();

        let response = create_expense_endpoint(State(state), Bytes::from_static(b"not json")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            get_header(&response, CONTENT_TYPE.as_str()),
            "application/json"
        );
        let body = read_json(response).await;
        assert_eq!(body["status"], "error");
        let message = body["message"].as_str().expect("message should be a string");
        assert!(message.starts_with("invalid request body: malformed JSON"));
    }

    #[tokio::test]
    async fn non_numeric_amount_returns_json_error() {
        let state = get_expense_state();
        let body = Bytes::from_static(
            br#"{"amount":"twelve","description":"Coffee","date":"2024-01-01","category_id":1}"#,
        );

        let response = create_expense_endpoint(State(state.clone()), body).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["message"],
            "invalid request body: field \"amount\" must be a number"
        );
        assert_eq!(
            get_expenses_with_category(&state.db_connection.lock().unwrap()),
            Ok(vec![])
        );
    }

    #[tokio::test]
    async fn unknown_category_is_stored() {
        let state = get_expense_state();
        let body = Bytes::from_static(
            br#"{"amount":5,"description":"Mystery","date":"2024-01-01","category_id":42}"#,
        );

        let response = create_expense_endpoint(State(state.clone()), body).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let count: i64 = state
            .db_connection
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn store_failure_returns_json_error() {
        let state = ExpenseState {
            db_connection: Arc::new(Mutex::new(Connection::open_in_memory().unwrap())),
        };
        let body = Bytes::from_static(
            br#"{"amount":1,"description":"Tea","date":"2024-01-01","category_id":1}"#,
        );

        let response = create_expense_endpoint(State(state), body).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["status"], "error");
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("no such table"), "unexpected message: {message}");
    }

    #[tokio::test]
    async fn poisoned_lock_returns_json_error() {
        let state = get_expense_state();
        poison_lock(&state.db_connection);
        let body = Bytes::from_static(
            br#"{"amount":1,"description":"Tea","date":"2024-01-01","category_id":1}"#,
        );

        let response = create_expense_endpoint(State(state), body).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            get_header(&response, CONTENT_TYPE.as_str()),
            "application/json"
        );
        let body = read_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "could not acquire the database lock");
    }
}
