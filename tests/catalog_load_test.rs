// Catalog loading from disk, including the bundled sample data
use recommender::{Catalog, Error, RankerIndex};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_bundled_catalog_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/recipes.csv");
    let catalog = Catalog::load(path).unwrap();

    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.get(0).unwrap().name, "Chicken Fried Rice");
    assert!(catalog.iter().all(|r| !r.ingredients.is_empty()));

    let index = RankerIndex::build_default(catalog);
    assert!(index.vocabulary_size() > 0);
    assert!(index.vocabulary_size() <= 500);
}

#[test]
fn test_missing_columns_fail_without_partial_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,ingredients,allergens").unwrap();
    writeln!(file, "Toast,bread,none").unwrap();

    match Catalog::load(file.path()) {
        Err(Error::DataLoad(msg)) => assert!(msg.contains("recipe")),
        other => panic!("expected DataLoad error, got {other:?}"),
    }
}

#[test]
fn test_quoted_fields_and_whitespace_headers() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, " recipe , ingredients , allergens ").unwrap();
    writeln!(file, "\"Mac, Cheese\",\"macaroni, cheddar\",dairy").unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    let recipe = catalog.get(0).unwrap();

    assert_eq!(recipe.name, "Mac, Cheese");
    assert_eq!(recipe.ingredients, "macaroni, cheddar");
    assert!(recipe.has_allergens());
}
