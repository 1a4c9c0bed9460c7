//! Serde data file structs for shop content.
//!
//! These define the on-disk format for the shop config, ingredients and
//! recipes. They are deserialized from RON, JSON, or TOML files and then
//! resolved into kitchen types by the loader.

use serde::Deserialize;

// ===========================================================================
// Ingredients
// ===========================================================================

/// An ingredient definition. Complex ingredients name their bases, which
/// must be defined earlier in the same file.
#[derive(Debug, Clone, Deserialize)]
pub enum IngredientData {
    Simple {
        name: String,
        cost: f64,
        quantity: u32,
    },
    Complex {
        name: String,
        #[serde(default)]
        premium: f64,
        bases: Vec<String>,
    },
}

impl IngredientData {
    pub fn name(&self) -> &str {
        match self {
            Self::Simple { name, .. } | Self::Complex { name, .. } => name,
        }
    }
}

// ===========================================================================
// Recipes
// ===========================================================================

/// A recipe definition. A complex recipe's `base` must be defined earlier in
/// the same file.
#[derive(Debug, Clone, Deserialize)]
pub enum RecipeData {
    Simple {
        name: String,
        #[serde(default)]
        premium: f64,
        ingredients: Vec<String>,
    },
    Complex {
        name: String,
        base: String,
        #[serde(default)]
        premium: f64,
        #[serde(default)]
        added: Vec<String>,
        #[serde(default)]
        removed: Vec<String>,
    },
}

impl RecipeData {
    pub fn name(&self) -> &str {
        match self {
            Self::Simple { name, .. } | Self::Complex { name, .. } => name,
        }
    }
}

// ===========================================================================
// TOML wrappers
// ===========================================================================

/// TOML wrapper: `[[ingredients]]` array.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlIngredients {
    pub ingredients: Vec<IngredientData>,
}

/// TOML wrapper: `[[recipes]]` array.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlRecipes {
    pub recipes: Vec<RecipeData>,
}
