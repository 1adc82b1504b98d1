//! Recipe catalog: the immutable, ordered recipe list supplied at startup.

use super::model::Recipe;
use crate::error::{DeckError, Result};
use std::collections::HashSet;

/// An immutable ordered collection of recipes.
///
/// The catalog is the deck engine's only data source. It is validated once
/// at construction (identifier uniqueness) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Creates a catalog from a list of recipes.
    ///
    /// # Returns
    ///
    /// - `Ok(Catalog)`: All recipe identifiers are unique.
    /// - `Err(DeckError::InvalidCatalog)`: A duplicate identifier was found.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut ids = HashSet::new();
        for recipe in &recipes {
            if !ids.insert(recipe.id.as_str()) {
                return Err(DeckError::invalid_catalog(format!(
                    "duplicate recipe id '{}'",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// Returns the number of recipes in the catalog.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if the catalog contains no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Looks up a recipe by its identifier.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Iterates over the recipes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Returns the full recipe list in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Resolves an identifier list to recipe records, preserving catalog
    /// order. Identifiers with no matching recipe are silently skipped.
    pub fn resolve(&self, ids: &[String]) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| ids.iter().any(|id| id == &r.id))
            .collect()
    }
}
