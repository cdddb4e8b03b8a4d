//! An expense tracker web backend.
//!
//! This library provides a small JSON API for recording expenses against a
//! fixed set of categories, backed by SQLite, and serves the browser client
//! from a directory of static assets.
//!
//! | Route | Description |
//! |---|---|
//! | `GET /api/categories` | List categories as `[{"id", "name"}]` |
//! | `POST /api/expenses` | Add an expense from `{"amount", "description", "date", "category_id"}` |
//! | `GET /api/expenses` | List expenses with their category name, newest first |

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod db;
mod endpoints;
mod error;
mod expense;
mod logging;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{
    Category, CategoryId, CategoryName, DEFAULT_CATEGORIES, create_category, get_all_categories,
    seed_categories,
};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use expense::{
    ExpenseId, ExpenseView, NewExpense, PayloadError, create_expense, get_expenses_with_category,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}
