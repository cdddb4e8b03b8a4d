use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{
    CategoryName, DEFAULT_CATEGORIES, get_all_categories, initialize_db, seed_categories,
};

/// A utility for creating a database of expense categories for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The name of a category to create. May be given more than once.
    /// Defaults to a general purpose set of categories.
    #[arg(long = "category", short)]
    categories: Vec<String>,
}

/// Create a database and seed it with categories.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'tracker.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'tracker.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let names: Vec<CategoryName> = if args.categories.is_empty() {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| CategoryName::new_unchecked(name))
            .collect()
    } else {
        args.categories
            .iter()
            .filter_map(|name| CategoryName::new(name))
            .collect()
    };

    if names.is_empty() {
        eprintln!("Category names cannot be empty.");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating categories...");
    let inserted = seed_categories(&names, &conn)?;

    for category in get_all_categories(&conn)? {
        println!("  {}: {}", category.id, category.name);
    }

    println!("Success! Created {inserted} categories.");

    Ok(())
}
