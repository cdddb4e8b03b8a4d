//! Categories that expenses are grouped under.

mod db;
mod domain;
mod list;

pub use db::{
    DEFAULT_CATEGORIES, create_category, create_category_table, get_all_categories,
    seed_categories,
};
pub use domain::{Category, CategoryId, CategoryName};
pub use list::get_categories_endpoint;
