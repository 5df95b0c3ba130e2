// Input normalisation for user-supplied filters

/// Split a comma-separated allergen list into lowercase, trimmed, unique
/// entries. Blank entries are dropped and first-seen order is kept.
pub fn parse_allergen_list(input: &str) -> Vec<String> {
    let mut allergens: Vec<String> = Vec::new();

    for entry in input.split(',') {
        let entry = entry.trim().to_lowercase();
        if !entry.is_empty() && !allergens.contains(&entry) {
            allergens.push(entry);
        }
    }

    allergens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allergen_list() {
        assert_eq!(
            parse_allergen_list("eggs, Soy,,  nuts "),
            vec!["eggs", "soy", "nuts"]
        );
    }

    #[test]
    fn test_parse_allergen_list_dedupes() {
        assert_eq!(parse_allergen_list("soy,SOY, soy"), vec!["soy"]);
    }

    #[test]
    fn test_parse_allergen_list_blank() {
        assert!(parse_allergen_list("").is_empty());
        assert!(parse_allergen_list(" , ,").is_empty());
    }
}
