// Recipe catalog: the immutable table every recommendation is ranked over

pub mod recipe;

pub use recipe::{declared_allergens, Recipe, NO_ALLERGENS_MARKER};

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Header columns every catalog source must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["recipe", "ingredients", "allergens"];

/// Ordered, read-only recipe table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Load a catalog from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::DataLoad(format!("Failed to open catalog {}: {e}", path.display()))
        })?;

        let catalog = Self::from_reader(file)?;
        info!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Parse a catalog from any CSV source. Fails on the first malformed row,
    /// so a partially read table is never returned.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();

        if !missing.is_empty() {
            return Err(Error::DataLoad(format!(
                "Missing required column(s): {} (found: {})",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }

        let mut recipes = Vec::new();
        for row in reader.deserialize::<Recipe>() {
            recipes.push(row?);
        }

        debug!("Parsed {} catalog rows", recipes.len());

        Ok(Self { recipes })
    }

    /// Build a catalog from records already in memory
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_preserves_row_order() {
        let csv = "recipe,ingredients,allergens\n\
                   Chicken Rice,\"chicken, rice, garlic\",none\n\
                   Egg Fried Rice,\"egg, rice, soy sauce\",\"eggs, soy\"\n";

        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "Chicken Rice");
        assert_eq!(catalog.get(1).unwrap().ingredients, "egg, rice, soy sauce");
        assert_eq!(catalog.get(1).unwrap().allergens, "eggs, soy");
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let csv = "allergens, cuisine ,recipe,ingredients\n\
                   dairy,italian,Risotto,\"rice, parmesan\"\n";

        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        let recipe = catalog.get(0).unwrap();

        assert_eq!(recipe.name, "Risotto");
        assert_eq!(recipe.ingredients, "rice, parmesan");
        assert_eq!(recipe.allergens, "dairy");
    }

    #[test]
    fn test_missing_column_is_data_load_error() {
        let csv = "recipe,ingredients\nToast,bread\n";

        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            Error::DataLoad(msg) => assert!(msg.contains("allergens")),
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_row_rejects_whole_catalog() {
        let csv = "recipe,ingredients,allergens\n\
                   Toast,bread,none\n\
                   Broken,row\n";

        let result = Catalog::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(Error::DataLoad(_))));
    }

    #[test]
    fn test_invalid_utf8_rejects_whole_catalog() {
        let bytes: &[u8] = b"recipe,ingredients,allergens\nToast,bre\xff\xfead,none\n";

        let result = Catalog::from_reader(bytes);
        assert!(matches!(result, Err(Error::DataLoad(_))));
    }

    #[test]
    fn test_empty_ingredients_are_retained() {
        let csv = "recipe,ingredients,allergens\nWater,,none\nToast,bread,\n";

        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().ingredients, "");
        assert_eq!(catalog.get(1).unwrap().allergens, "");
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let catalog = Catalog::from_reader("recipe,ingredients,allergens\n".as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "recipe,ingredients,allergens").unwrap();
        writeln!(file, "Pancakes,\"flour, eggs, milk\",\"eggs, dairy\"").unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next().unwrap().name, "Pancakes");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/recipes.csv");
        assert!(matches!(result, Err(Error::DataLoad(_))));
    }
}
