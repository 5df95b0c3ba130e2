use crate::config::Settings;
use crate::ranker::{RankerIndex, ScoredRecipe};
use crate::utils::{format_match_percent, parse_allergen_list, truncate};
use crate::{Error, Result};
use tracing::warn;

/// Rank the catalog for `ingredients` and print the results
pub fn recommend(
    index: &RankerIndex,
    settings: &Settings,
    ingredients: &str,
    limit: Option<usize>,
    exclude: Option<String>,
) -> Result<()> {
    let top_n = limit.unwrap_or(settings.ranker.default_top_n);
    let exclude = exclude
        .as_deref()
        .map(parse_allergen_list)
        .unwrap_or_default();

    match index.query(ingredients, top_n, &exclude) {
        Ok(results) => {
            print_recommendations(&results);
            Ok(())
        }
        // Bad input is reported here; the process still exits cleanly
        Err(e) if e.is_user_error() => {
            println!("\x1b[31m\u{2717}\x1b[0m {}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Summary of a loaded catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub total_recipes: usize,
    pub empty_ingredients: usize,
    pub with_allergens: usize,
    pub vocabulary_size: usize,
}

impl CatalogReport {
    pub fn from_index(index: &RankerIndex) -> Self {
        let catalog = index.catalog();

        Self {
            total_recipes: catalog.len(),
            empty_ingredients: catalog
                .iter()
                .filter(|r| r.ingredients.trim().is_empty())
                .count(),
            with_allergens: catalog.iter().filter(|r| r.has_allergens()).count(),
            vocabulary_size: index.vocabulary_size(),
        }
    }
}

/// Report on the catalog the index was built from
pub fn validate_catalog(index: &RankerIndex) -> Result<()> {
    let report = CatalogReport::from_index(index);

    if report.total_recipes == 0 {
        return Err(Error::DataLoad("Catalog has no recipes".to_string()));
    }

    println!(
        "\x1b[32m\u{2713}\x1b[0m Valid catalog: {} recipes",
        report.total_recipes
    );
    println!("  With allergens: {}", report.with_allergens);
    println!("  Vocabulary terms: {}", report.vocabulary_size);

    if report.empty_ingredients > 0 {
        warn!(
            "{} recipes have no ingredients and will never match a query",
            report.empty_ingredients
        );
        println!("  Empty ingredient lists: {}", report.empty_ingredients);
    }

    Ok(())
}

fn print_recommendations(results: &[ScoredRecipe]) {
    if results.is_empty() {
        println!("No recipes found. Try different ingredients or remove some filters.");
        return;
    }

    println!("\nFound {} recipes for you:\n", results.len());
    println!("{:<4} {:<40} {:>7}  {:<24}", "#", "Recipe", "Match", "Allergens");
    println!("{}", "-".repeat(78));

    for (i, recipe) in results.iter().enumerate() {
        let allergens = recipe
            .allergen_warning()
            .map(|a| format!("Contains: {a}"))
            .unwrap_or_else(|| "No common allergens".to_string());

        println!(
            "{:<4} {:<40} {:>7}  {:<24}",
            i + 1,
            truncate(&recipe.name, 38),
            format_match_percent(recipe.similarity),
            truncate(&allergens, 24)
        );
        println!("     {}", truncate(&recipe.ingredients, 72));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Recipe};

    fn index() -> RankerIndex {
        RankerIndex::build_default(Catalog::from_recipes(vec![
            Recipe::new("Chicken Rice", "chicken, rice, garlic", "none"),
            Recipe::new("Egg Fried Rice", "egg, rice, soy sauce", "eggs, soy"),
            Recipe::new("Plain Water", "", ""),
        ]))
    }

    #[test]
    fn test_catalog_report() {
        let report = CatalogReport::from_index(&index());

        assert_eq!(report.total_recipes, 3);
        assert_eq!(report.empty_ingredients, 1);
        assert_eq!(report.with_allergens, 1);
        assert!(report.vocabulary_size > 0);
    }

    #[test]
    fn test_recommend_reports_blank_input_without_failing() {
        let settings = crate::config::test_settings();
        let result = recommend(&index(), &settings, "  ", None, None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_recommend_reports_zero_limit_without_failing() {
        let settings = crate::config::test_settings();
        assert!(recommend(&index(), &settings, "rice", Some(0), None).is_ok());
    }

    #[test]
    fn test_recommend_with_exclusions() {
        let settings = crate::config::test_settings();
        let result = recommend(&index(), &settings, "rice", Some(2), Some("soy".to_string()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_empty_catalog_fails() {
        let empty = RankerIndex::build_default(Catalog::default());
        assert!(validate_catalog(&empty).is_err());
        assert!(validate_catalog(&index()).is_ok());
    }
}
