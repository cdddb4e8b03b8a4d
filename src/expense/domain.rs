//! Core expense domain types.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// An expense that has not been stored yet.
///
/// The ID is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The amount of money spent.
    pub amount: f64,
    /// A text description of what the money was spent on.
    pub description: String,
    /// When the money was spent, as an ISO-8601 calendar date (e.g. "2024-01-31").
    ///
    /// The date is stored as given, it is not checked.
    pub date: String,
    /// The category the expense belongs to.
    ///
    /// This is not checked against the categories table, see
    /// [get_expenses_with_category](crate::get_expenses_with_category)
    /// for what happens to expenses with a dangling category ID.
    pub category_id: CategoryId,
}

/// An expense joined with the name of its category.
///
/// Serializes as `{"id", "amount", "description", "date", "category_name"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseView {
    /// The ID the database assigned to the expense.
    pub id: ExpenseId,
    /// The amount of money spent.
    pub amount: f64,
    /// A text description of what the money was spent on.
    pub description: String,
    /// When the money was spent, exactly as it was stored.
    pub date: String,
    /// The name of the category the expense's category ID refers to.
    pub category_name: String,
}
