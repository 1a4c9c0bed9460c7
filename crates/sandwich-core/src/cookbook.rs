//! The cookbook: arena of recipes plus the recipe capability.
//!
//! Every operation that needs stock or prices takes the [`Pantry`] by
//! reference, so the cookbook and the pantry can be borrowed independently.
//!
//! Two behaviours of complex recipes to be aware of:
//!
//! - Removed ingredients are always subtracted from the cost, whether or not
//!   the base recipe actually lists them.
//! - In [`Cookbook::can_make`] / [`Cookbook::make`] the base recipe is checked
//!   against the caller's exclusions merged with the recipe's own removals,
//!   while the added ingredients are checked against the caller's exclusions
//!   only.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::KitchenError;
use crate::fixed::{Cost, sum_costs};
use crate::id::{IngredientId, RecipeId};
use crate::pantry::Pantry;
use crate::recipe::{ExclusionSet, Recipe, RecipeKind};

/// Owns all recipes and resolves names to handles.
#[derive(Debug, Default)]
pub struct Cookbook {
    recipes: SlotMap<RecipeId, Recipe>,
    name_to_id: HashMap<String, RecipeId>,
    order: Vec<RecipeId>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Registration --

    /// Register a recipe made of `ingredients` plus a premium.
    pub fn register_simple(
        &mut self,
        pantry: &Pantry,
        name: &str,
        ingredients: Vec<IngredientId>,
        premium: Cost,
    ) -> Result<RecipeId, KitchenError> {
        self.check_name(name)?;
        if ingredients.is_empty() {
            return Err(KitchenError::EmptyRecipe(name.to_string()));
        }
        check_live(pantry, &ingredients)?;
        Ok(self.insert(Recipe {
            name: name.to_string(),
            premium,
            kind: RecipeKind::Simple { ingredients },
        }))
    }

    /// Register a recipe derived from `base`.
    pub fn register_complex(
        &mut self,
        pantry: &Pantry,
        name: &str,
        added: Vec<IngredientId>,
        base: RecipeId,
        removed: Vec<IngredientId>,
        premium: Cost,
    ) -> Result<RecipeId, KitchenError> {
        self.check_name(name)?;
        if !self.recipes.contains_key(base) {
            return Err(KitchenError::MissingRecipe(base));
        }
        if added.is_empty() && removed.is_empty() {
            return Err(KitchenError::NoChanges(name.to_string()));
        }
        check_live(pantry, &added)?;
        check_live(pantry, &removed)?;

        let mut unique_removed = Vec::with_capacity(removed.len());
        for id in removed {
            if !unique_removed.contains(&id) {
                unique_removed.push(id);
            }
        }

        Ok(self.insert(Recipe {
            name: name.to_string(),
            premium,
            kind: RecipeKind::Complex {
                base,
                added,
                removed: unique_removed,
            },
        }))
    }

    fn check_name(&self, name: &str) -> Result<(), KitchenError> {
        if self.name_to_id.contains_key(name) {
            return Err(KitchenError::DuplicateRecipe(name.to_string()));
        }
        Ok(())
    }

    fn insert(&mut self, recipe: Recipe) -> RecipeId {
        let name = recipe.name.clone();
        let id = self.recipes.insert(recipe);
        self.name_to_id.insert(name, id);
        self.order.push(id);
        id
    }

    // -- Lookup --

    /// Resolve a recipe name to its handle.
    pub fn find_recipe(&self, name: &str) -> Option<RecipeId> {
        self.name_to_id.get(name).copied()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn name(&self, id: RecipeId) -> Option<&str> {
        self.recipes.get(id).map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe handles in registration order.
    pub fn ids(&self) -> &[RecipeId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecipeId, &Recipe)> {
        self.order
            .iter()
            .filter_map(|id| self.recipes.get(*id).map(|r| (*id, r)))
    }

    // -- Recipe capability --

    /// Ingredient cost plus premium.
    pub fn total_cost(&self, id: RecipeId, pantry: &Pantry) -> Cost {
        let Some(recipe) = self.recipes.get(id) else {
            return Cost::ZERO;
        };
        self.raw_cost(id, pantry) + recipe.premium
    }

    /// Ingredient cost without this recipe's premium. For a complex recipe
    /// this is the base's total plus the added ingredients minus every
    /// removed ingredient.
    pub fn raw_cost(&self, id: RecipeId, pantry: &Pantry) -> Cost {
        let Some(recipe) = self.recipes.get(id) else {
            return Cost::ZERO;
        };
        match &recipe.kind {
            RecipeKind::Simple { ingredients } => {
                sum_costs(Cost::ZERO, ingredients.iter().map(|i| pantry.cost(*i)))
            }
            RecipeKind::Complex {
                base,
                added,
                removed,
            } => {
                let with_added = sum_costs(
                    self.total_cost(*base, pantry),
                    added.iter().map(|i| pantry.cost(*i)),
                );
                let removed_cost = sum_costs(Cost::ZERO, removed.iter().map(|i| pantry.cost(*i)));
                with_added - removed_cost
            }
        }
    }

    /// Whether the recipe could be made now, skipping `exclude`. Never mutates.
    pub fn can_make(&self, id: RecipeId, pantry: &Pantry, exclude: &ExclusionSet) -> bool {
        let Some(recipe) = self.recipes.get(id) else {
            return false;
        };
        match &recipe.kind {
            RecipeKind::Simple { ingredients } => ingredients
                .iter()
                .filter(|i| !exclude.contains(*i))
                .all(|i| pantry.can_use(*i)),
            RecipeKind::Complex {
                base,
                added,
                removed,
            } => {
                let merged = merge_exclusions(exclude, removed);
                self.can_make(*base, pantry, &merged)
                    && added
                        .iter()
                        .filter(|i| !exclude.contains(*i))
                        .all(|i| pantry.can_use(*i))
            }
        }
    }

    /// Make the recipe, consuming one of every ingredient not in `exclude`.
    /// Returns false with no stock change if [`Cookbook::can_make`] fails.
    pub fn make(&self, id: RecipeId, pantry: &mut Pantry, exclude: &ExclusionSet) -> bool {
        if !self.can_make(id, pantry, exclude) {
            return false;
        }
        let Some(recipe) = self.recipes.get(id) else {
            return false;
        };
        match &recipe.kind {
            RecipeKind::Simple { ingredients } => {
                for i in ingredients.iter().filter(|i| !exclude.contains(*i)) {
                    if !pantry.use_ingredient(*i) {
                        tracing::debug!(recipe = %recipe.name, ingredient = ?i, "ingredient ran out mid-make");
                    }
                }
            }
            RecipeKind::Complex {
                base,
                added,
                removed,
            } => {
                let merged = merge_exclusions(exclude, removed);
                if !self.make(*base, pantry, &merged) {
                    tracing::debug!(recipe = %recipe.name, "base recipe could not be made");
                }
                for i in added.iter().filter(|i| !exclude.contains(*i)) {
                    if !pantry.use_ingredient(*i) {
                        tracing::debug!(recipe = %recipe.name, ingredient = ?i, "addition ran out mid-make");
                    }
                }
            }
        }
        tracing::debug!(recipe = %recipe.name, excluded = exclude.len(), "recipe made");
        true
    }

    /// The effective ingredient list. For a complex recipe: the base's list,
    /// then added ingredients not already present, with each removed
    /// ingredient taken out.
    pub fn ingredients(&self, id: RecipeId) -> Vec<IngredientId> {
        let Some(recipe) = self.recipes.get(id) else {
            return Vec::new();
        };
        match &recipe.kind {
            RecipeKind::Simple { ingredients } => ingredients.clone(),
            RecipeKind::Complex {
                base,
                added,
                removed,
            } => {
                let mut list = self.ingredients(*base);
                for i in added {
                    if !list.contains(i) {
                        list.push(*i);
                    }
                }
                for r in removed {
                    if let Some(pos) = list.iter().position(|i| i == r) {
                        list.remove(pos);
                    }
                }
                list
            }
        }
    }

    /// Name lookup over the ingredients listed at this level.
    ///
    /// A complex recipe only answers for its own added ingredients (and not
    /// if the same name is among its removals); ingredients inherited from
    /// the base recipe are not consulted.
    pub fn contains_ingredient(&self, id: RecipeId, pantry: &Pantry, name: &str) -> bool {
        let Some(recipe) = self.recipes.get(id) else {
            return false;
        };
        let named = |list: &[IngredientId]| list.iter().any(|i| pantry.name(*i) == Some(name));
        match &recipe.kind {
            RecipeKind::Simple { ingredients } => named(ingredients),
            RecipeKind::Complex { added, removed, .. } => named(added) && !named(removed),
        }
    }
}

fn check_live(pantry: &Pantry, ids: &[IngredientId]) -> Result<(), KitchenError> {
    match ids.iter().find(|i| !pantry.contains(**i)) {
        Some(missing) => Err(KitchenError::MissingIngredient(*missing)),
        None => Ok(()),
    }
}

fn merge_exclusions(exclude: &ExclusionSet, removed: &[IngredientId]) -> ExclusionSet {
    let mut merged = exclude.clone();
    merged.extend(removed.iter().copied());
    merged
}
