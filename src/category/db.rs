//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryName},
};

/// The categories a fresh database is seeded with.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Health",
    "Other",
];

/// Create a category and return it with its generated ID.
///
/// Categories are only created by the seeding tools, the HTTP API never calls this.
///
/// # Errors
/// Returns an [Error::SqlError] if a category with the same name already
/// exists or if there is some other SQL error.
pub fn create_category(name: CategoryName, connection: &Connection) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO categories (name) VALUES (?1);",
        (name.as_ref(),),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Category { id, name })
}

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Insert each of `names` unless a category with that name already exists.
///
/// Returns the number of categories that were inserted.
pub fn seed_categories(names: &[CategoryName], connection: &Connection) -> Result<usize, Error> {
    let mut statement = connection.prepare("INSERT OR IGNORE INTO categories (name) VALUES (?1);")?;
    let mut inserted = 0;

    for name in names {
        inserted += statement.execute((name.as_ref(),))?;
    }

    Ok(inserted)
}

/// Initialize the categories table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
