pub mod config;
pub mod error;

// Core: catalog storage and similarity ranking
pub mod catalog;
pub mod ranker;

// Presentation surfaces
pub mod api;
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use catalog::{Catalog, Recipe};
pub use config::Settings;
pub use error::{Error, Result};
pub use ranker::{RankerIndex, ScoredRecipe};
