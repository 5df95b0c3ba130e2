use crate::catalog::{declared_allergens, Catalog, Recipe};
use crate::error::{Error, Result, EMPTY_QUERY_MESSAGE};
use crate::ranker::tokenizer::terms;
use crate::ranker::vector::SparseVector;
use crate::ranker::vocabulary::{Vocabulary, DEFAULT_MAX_VOCAB_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Default number of recommendations returned per query
pub const DEFAULT_TOP_N: usize = 5;

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    pub name: String,
    pub ingredients: String,
    pub allergens: String,
    pub similarity: f64,
}

impl ScoredRecipe {
    fn from_recipe(recipe: &Recipe, similarity: f64) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            allergens: recipe.allergens.clone(),
            similarity,
        }
    }

    /// Allergen text to warn about, if any
    pub fn allergen_warning(&self) -> Option<&str> {
        declared_allergens(&self.allergens)
    }
}

/// TF-IDF vector space over a catalog's ingredient lists.
///
/// Built once, then queried any number of times through `&self`.
#[derive(Debug, Clone)]
pub struct RankerIndex {
    catalog: Catalog,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
    max_vocab_size: usize,
}

impl RankerIndex {
    /// Build the vector space for `catalog`, keeping at most
    /// `max_vocab_size` terms
    pub fn build(catalog: Catalog, max_vocab_size: usize) -> Self {
        let documents: Vec<Vec<String>> = catalog
            .iter()
            .map(|recipe| terms(&recipe.ingredients))
            .collect();

        let vocabulary = Vocabulary::build(&documents, max_vocab_size);

        // Smoothed IDF: ln((1 + N) / (1 + df)) + 1
        let n_docs = catalog.len() as f64;
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|dim| {
                let df = vocabulary.document_frequency(dim) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors: Vec<SparseVector> = documents
            .iter()
            .map(|doc_terms| weigh(doc_terms, &vocabulary, &idf))
            .collect();

        info!(
            "Ranker index built: {} recipes, {} terms (cap {})",
            catalog.len(),
            vocabulary.len(),
            max_vocab_size
        );

        Self {
            catalog,
            vocabulary,
            idf,
            vectors,
            max_vocab_size,
        }
    }

    /// Build with the default vocabulary cap
    pub fn build_default(catalog: Catalog) -> Self {
        Self::build(catalog, DEFAULT_MAX_VOCAB_SIZE)
    }

    /// Rank the catalog against a free-text ingredient list.
    ///
    /// Recipes whose allergens mention any of `exclude_allergens` are
    /// dropped. Equal scores keep catalog order. An empty result is a
    /// valid outcome, not an error.
    pub fn query<S: AsRef<str>>(
        &self,
        text: &str,
        top_n: usize,
        exclude_allergens: &[S],
    ) -> Result<Vec<ScoredRecipe>> {
        if text.trim().is_empty() {
            return Err(Error::InvalidQuery(EMPTY_QUERY_MESSAGE.to_string()));
        }
        if top_n == 0 {
            return Err(Error::InvalidQuery(
                "number of results must be at least 1".to_string(),
            ));
        }

        let query_vector = self.vectorize(text);
        if query_vector.is_zero() {
            debug!("Query shares no terms with the vocabulary: {:?}", text);
        }

        let mut scored: Vec<(usize, f64)> = self
            .catalog
            .iter()
            .zip(&self.vectors)
            .enumerate()
            .filter(|(_, (recipe, _))| !recipe.contains_any_allergen(exclude_allergens))
            .map(|(row, (_, vector))| (row, query_vector.cosine(vector)))
            .collect();

        // sort_by is stable, so ties stay in catalog order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_n);

        debug!(
            "Query {:?} returned {} of {} recipes",
            text,
            scored.len(),
            self.catalog.len()
        );

        Ok(scored
            .into_iter()
            .map(|(row, similarity)| {
                ScoredRecipe::from_recipe(&self.catalog.recipes()[row], similarity)
            })
            .collect())
    }

    /// Query with the default result count and no allergen exclusions
    pub fn query_default(&self, text: &str) -> Result<Vec<ScoredRecipe>> {
        self.query::<&str>(text, DEFAULT_TOP_N, &[])
    }

    /// Project free text into the index's vector space
    pub fn vectorize(&self, text: &str) -> SparseVector {
        weigh(&terms(text), &self.vocabulary, &self.idf)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn max_vocab_size(&self) -> usize {
        self.max_vocab_size
    }

    /// IDF weight of a vocabulary term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.dimension(term).map(|dim| self.idf[dim])
    }

    /// Normalized vector of the recipe at `row`
    pub fn recipe_vector(&self, row: usize) -> Option<&SparseVector> {
        self.vectors.get(row)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// Term counts restricted to the vocabulary, times IDF, unit-normalized
fn weigh(doc_terms: &[String], vocabulary: &Vocabulary, idf: &[f64]) -> SparseVector {
    let mut counts: HashMap<usize, f64> = HashMap::new();
    for term in doc_terms {
        if let Some(dim) = vocabulary.dimension(term) {
            *counts.entry(dim).or_insert(0.0) += 1.0;
        }
    }

    SparseVector::from_entries(
        counts
            .into_iter()
            .map(|(dim, tf)| (dim, tf * idf[dim]))
            .collect(),
    )
    .normalize()
}
