//! Expenses: storing them, listing them with their category, and the HTTP endpoints for both.

mod create;
mod db;
mod domain;
mod list;
mod payload;
mod state;

pub use create::create_expense_endpoint;
pub use db::{create_expense, create_expense_table, get_expenses_with_category};
pub use domain::{ExpenseId, ExpenseView, NewExpense};
pub use list::get_expenses_endpoint;
pub use payload::{PayloadError, parse_new_expense};
pub use state::ExpenseState;
