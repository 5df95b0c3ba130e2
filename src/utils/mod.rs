// Utility functions
pub mod sanitize;
pub mod validation;

pub use sanitize::{format_match_percent, truncate};
pub use validation::parse_allergen_list;
