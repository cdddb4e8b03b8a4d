//! Database schema setup.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, category::create_category_table, expense::create_expense_table};

/// Create the tables for the domain models if they do not already exist.
///
/// The tables are created inside a single exclusive transaction, so either
/// all of them are created or none are.
///
/// No foreign key is declared from `expenses.category_id` to `categories.id`.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
