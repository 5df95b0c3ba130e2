use serde::{Deserialize, Serialize};

/// Marker used by catalog files for recipes without common allergens
pub const NO_ALLERGENS_MARKER: &str = "none";

/// Allergen text worth warning about: `None` when the field is blank or
/// holds the "none" marker
pub fn declared_allergens(allergens: &str) -> Option<&str> {
    let allergens = allergens.trim();
    (!allergens.is_empty() && !allergens.eq_ignore_ascii_case(NO_ALLERGENS_MARKER))
        .then_some(allergens)
}

/// A single catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "recipe")]
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub allergens: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        allergens: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            allergens: allergens.into(),
        }
    }

    /// True unless the allergen field is blank or the "none" marker
    pub fn has_allergens(&self) -> bool {
        declared_allergens(&self.allergens).is_some()
    }

    /// Allergen text to warn about, if any
    pub fn allergen_warning(&self) -> Option<&str> {
        declared_allergens(&self.allergens)
    }

    /// Case-insensitive substring match of any exclusion term against the
    /// allergen field. Blank terms never match, and neither do recipes
    /// without allergens. A plain substring filter would also drop a "none"
    /// row for a term like "no"; here that row is kept.
    pub fn contains_any_allergen<S: AsRef<str>>(&self, excluded: &[S]) -> bool {
        if !self.has_allergens() {
            return false;
        }

        let allergens = self.allergens.to_lowercase();
        excluded.iter().any(|term| {
            let term = term.as_ref().trim();
            !term.is_empty() && allergens.contains(&term.to_lowercase())
        })
    }
}
