/// Lowercase `text` and split it on every non-alphanumeric character
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unigrams and adjacent-pair bigrams, in generation order.
///
/// Each position yields its unigram followed by the bigram it starts, so
/// `"soy sauce rice"` produces `soy`, `soy sauce`, `sauce`, `sauce rice`,
/// `rice`. The order matters: vocabulary tie-breaking uses first appearance.
pub fn terms(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut terms = Vec::with_capacity(tokens.len() * 2);

    for (i, token) in tokens.iter().enumerate() {
        terms.push(token.clone());
        if let Some(next) = tokens.get(i + 1) {
            terms.push(format!("{token} {next}"));
        }
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Chicken, RICE;garlic  (minced)"),
            vec!["chicken", "rice", "garlic", "minced"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits_and_unicode() {
        assert_eq!(tokenize("7-up, Jalapeño"), vec!["7", "up", "jalapeño"]);
    }

    #[test]
    fn test_tokenize_blank() {
        assert!(tokenize("  , ;  ").is_empty());
    }

    #[test]
    fn test_terms_interleave_unigrams_and_bigrams() {
        assert_eq!(
            terms("soy sauce, rice"),
            vec!["soy", "soy sauce", "sauce", "sauce rice", "rice"]
        );
    }

    #[test]
    fn test_terms_single_token() {
        assert_eq!(terms("Durian"), vec!["durian"]);
    }
}
