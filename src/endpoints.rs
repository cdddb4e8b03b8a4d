//! The API endpoint URIs.

/// The route for listing expense categories.
pub const CATEGORIES_API: &str = "/api/categories";
/// The route for listing and creating expenses.
pub const EXPENSES_API: &str = "/api/expenses";
