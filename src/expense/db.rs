//! Database operations for expenses.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    expense::{ExpenseId, ExpenseView, NewExpense},
};

/// Insert an expense and return the ID the database assigned to it.
///
/// The category ID is stored as given. No check is made that the category
/// exists.
pub fn create_expense(expense: &NewExpense, connection: &Connection) -> Result<ExpenseId, Error> {
    connection.execute(
        "INSERT INTO expenses (amount, description, date, category_id) VALUES (?1, ?2, ?3, ?4);",
        (
            expense.amount,
            &expense.description,
            &expense.date,
            expense.category_id,
        ),
    )?;

    Ok(connection.last_insert_rowid())
}

/// Retrieve every expense together with its category name, newest (highest ID) first.
///
/// Expenses whose category ID does not match a category are left out.
pub fn get_expenses_with_category(connection: &Connection) -> Result<Vec<ExpenseView>, Error> {
    connection
        .prepare(
            "SELECT expenses.id, expenses.amount, expenses.description, expenses.date, categories.name
            FROM expenses
            INNER JOIN categories ON expenses.category_id = categories.id
            ORDER BY expenses.id DESC;",
        )?
        .query_map([], map_view_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Initialize the expenses table.
///
/// `AUTOINCREMENT` stops IDs from being reused, so a higher ID always means a
/// newer expense.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            category_id INTEGER NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_view_row(row: &Row) -> Result<ExpenseView, rusqlite::Error> {
    Ok(ExpenseView {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        category_name: row.get(4)?,
    })
}
