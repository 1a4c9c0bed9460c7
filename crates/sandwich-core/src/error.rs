use crate::id::{IngredientId, RecipeId};

/// Errors raised while building or editing the kitchen's composition graph.
///
/// Availability and consumption never fail with an error; they report
/// `false` instead. Only construction, lookup and removal are fallible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KitchenError {
    #[error("an ingredient named '{0}' already exists")]
    DuplicateIngredient(String),

    #[error("a recipe named '{0}' already exists")]
    DuplicateRecipe(String),

    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("ingredient handle {0:?} is not in the pantry")]
    MissingIngredient(IngredientId),

    #[error("recipe handle {0:?} is not in the cookbook")]
    MissingRecipe(RecipeId),

    #[error("complex ingredient '{0}' needs at least one base ingredient")]
    EmptyBases(String),

    #[error("recipe '{0}' needs at least one ingredient")]
    EmptyRecipe(String),

    #[error("complex recipe '{0}' neither adds nor removes anything")]
    NoChanges(String),

    #[error("ingredient '{name}' is still used by {}", used_by.join(", "))]
    IngredientInUse { name: String, used_by: Vec<String> },
}
