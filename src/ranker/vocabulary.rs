use std::collections::{HashMap, HashSet};

/// Default cap on the number of vector dimensions
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 500;

/// Term to dimension mapping, with the document frequency of each term
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
    doc_freq: Vec<usize>,
}

impl Vocabulary {
    /// Select up to `max_size` terms by document frequency.
    ///
    /// `documents` holds the term sequence of each document. Terms with equal
    /// frequency keep the order in which they were first seen, so the same
    /// corpus always yields the same dimensions. Dimension 0 is the most
    /// frequent term.
    pub fn build(documents: &[Vec<String>], max_size: usize) -> Self {
        let mut first_seen: Vec<&str> = Vec::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for terms in documents {
            let mut seen_here: HashSet<&str> = HashSet::new();
            for term in terms {
                let term = term.as_str();
                if !seen_here.insert(term) {
                    continue;
                }
                let count = doc_freq.entry(term).or_insert(0);
                if *count == 0 {
                    first_seen.push(term);
                }
                *count += 1;
            }
        }

        // Stable sort keeps first-appearance order among equal frequencies
        let mut ranked: Vec<(&str, usize)> = first_seen
            .into_iter()
            .map(|term| (term, doc_freq[term]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_size);

        let mut vocabulary = Self {
            index: HashMap::with_capacity(ranked.len()),
            terms: Vec::with_capacity(ranked.len()),
            doc_freq: Vec::with_capacity(ranked.len()),
        };
        for (dim, (term, df)) in ranked.into_iter().enumerate() {
            vocabulary.index.insert(term.to_string(), dim);
            vocabulary.terms.push(term.to_string());
            vocabulary.doc_freq.push(df);
        }

        vocabulary
    }

    /// Dimension of `term`, if it made it into the vocabulary
    pub fn dimension(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Number of documents containing the term at `dimension`
    pub fn document_frequency(&self, dimension: usize) -> usize {
        self.doc_freq.get(dimension).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
