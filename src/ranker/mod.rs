// TF-IDF similarity ranking over the recipe catalog
// Vocabulary and recipe vectors are computed once; queries only read them

pub mod index;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

// Re-exports
pub use index::{RankerIndex, ScoredRecipe, DEFAULT_TOP_N};
pub use vector::SparseVector;
pub use vocabulary::{Vocabulary, DEFAULT_MAX_VOCAB_SIZE};
