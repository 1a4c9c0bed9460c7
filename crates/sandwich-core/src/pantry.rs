//! The pantry: arena that owns every ingredient.
//!
//! Recipes, substitutions and sandwiches refer to ingredients by
//! [`IngredientId`] only. Cost, quantity and consumption are resolved
//! recursively through the arena, so a complex ingredient never holds a
//! pointer to its bases.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::KitchenError;
use crate::fixed::{Cost, sum_costs};
use crate::id::IngredientId;
use crate::ingredient::{Ingredient, IngredientKind};

/// Owns all ingredients and resolves names to handles.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    ingredients: SlotMap<IngredientId, Ingredient>,
    name_to_id: HashMap<String, IngredientId>,
    /// Insertion order, for listings.
    order: Vec<IngredientId>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Registration --

    /// Add a leaf ingredient with its own stock.
    pub fn add_simple(
        &mut self,
        name: &str,
        quantity: u32,
        unit_cost: Cost,
    ) -> Result<IngredientId, KitchenError> {
        self.check_name(name)?;
        Ok(self.insert(Ingredient::simple(name, quantity, unit_cost)))
    }

    /// Add an ingredient derived from existing ones. `bases` must be
    /// non-empty and every handle must be live.
    pub fn add_complex(
        &mut self,
        name: &str,
        premium: Cost,
        bases: Vec<IngredientId>,
    ) -> Result<IngredientId, KitchenError> {
        self.check_name(name)?;
        if bases.is_empty() {
            return Err(KitchenError::EmptyBases(name.to_string()));
        }
        if let Some(missing) = bases.iter().find(|b| !self.contains(**b)) {
            return Err(KitchenError::MissingIngredient(*missing));
        }
        Ok(self.insert(Ingredient::complex(name, premium, bases)))
    }

    fn check_name(&self, name: &str) -> Result<(), KitchenError> {
        if self.name_to_id.contains_key(name) {
            return Err(KitchenError::DuplicateIngredient(name.to_string()));
        }
        Ok(())
    }

    fn insert(&mut self, ingredient: Ingredient) -> IngredientId {
        let name = ingredient.name.clone();
        let id = self.ingredients.insert(ingredient);
        self.name_to_id.insert(name, id);
        self.order.push(id);
        id
    }

    /// Drop an ingredient from the arena. Callers are responsible for making
    /// sure nothing still refers to it; see `Kitchen::remove_ingredient`.
    pub(crate) fn remove(&mut self, id: IngredientId) -> Option<Ingredient> {
        let ingredient = self.ingredients.remove(id)?;
        self.name_to_id.remove(&ingredient.name);
        self.order.retain(|other| *other != id);
        Some(ingredient)
    }

    // -- Lookup --

    /// Resolve an ingredient name to its handle.
    pub fn get_ingredient(&self, name: &str) -> Option<IngredientId> {
        self.name_to_id.get(name).copied()
    }

    pub fn get(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    pub fn contains(&self, id: IngredientId) -> bool {
        self.ingredients.contains_key(id)
    }

    pub fn name(&self, id: IngredientId) -> Option<&str> {
        self.ingredients.get(id).map(|i| i.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Ingredient handles in the order they were added.
    pub fn ids(&self) -> &[IngredientId] {
        &self.order
    }

    /// Iterate ingredients in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (IngredientId, &Ingredient)> {
        self.order
            .iter()
            .filter_map(|id| self.ingredients.get(*id).map(|i| (*id, i)))
    }

    // -- Ingredient capability --

    /// Unit cost of a leaf, or premium plus the cost of every base.
    pub fn cost(&self, id: IngredientId) -> Cost {
        match self.ingredients.get(id).map(|i| &i.kind) {
            Some(IngredientKind::Simple { unit_cost, .. }) => *unit_cost,
            Some(IngredientKind::Complex { premium, bases }) => {
                sum_costs(*premium, bases.iter().map(|b| self.cost(*b)))
            }
            None => {
                tracing::warn!(?id, "cost of an ingredient that is no longer stocked");
                Cost::ZERO
            }
        }
    }

    /// Stock of a leaf, or the lowest stock among a complex ingredient's bases.
    pub fn quantity(&self, id: IngredientId) -> u32 {
        match self.ingredients.get(id).map(|i| &i.kind) {
            Some(IngredientKind::Simple { quantity, .. }) => *quantity,
            Some(IngredientKind::Complex { bases, .. }) => {
                bases.iter().map(|b| self.quantity(*b)).min().unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Whether one unit could be used right now. For a complex ingredient,
    /// every base must have stock.
    pub fn can_use(&self, id: IngredientId) -> bool {
        match self.ingredients.get(id).map(|i| &i.kind) {
            Some(IngredientKind::Simple { quantity, .. }) => *quantity > 0,
            Some(IngredientKind::Complex { bases, .. }) => {
                bases.iter().all(|b| self.quantity(*b) > 0)
            }
            None => false,
        }
    }

    /// Use one unit. Returns false, without touching any stock, if it cannot
    /// be used. A complex ingredient checks every base before decrementing any.
    pub fn use_ingredient(&mut self, id: IngredientId) -> bool {
        let bases = match self.ingredients.get_mut(id).map(|i| &mut i.kind) {
            Some(IngredientKind::Simple { quantity, .. }) => {
                if *quantity == 0 {
                    return false;
                }
                *quantity -= 1;
                return true;
            }
            Some(IngredientKind::Complex { bases, .. }) => bases.clone(),
            None => {
                tracing::warn!(?id, "tried to use an ingredient that is no longer stocked");
                return false;
            }
        };

        if !bases.iter().all(|b| self.can_use(*b)) {
            return false;
        }
        for base in bases {
            if !self.use_ingredient(base) {
                tracing::debug!(?id, ?base, "base ran out part way through a complex use");
            }
        }
        true
    }

    /// Replenish stock by `amount` (which may be negative).
    ///
    /// For a complex ingredient this levels the bases: each base `b` receives
    /// `amount - (b.quantity - low)` where `low` is the lowest base stock, so
    /// afterwards every base holds `low + amount`.
    pub fn order_more(&mut self, id: IngredientId, amount: i64) {
        let bases = match self.ingredients.get_mut(id) {
            Some(Ingredient {
                name,
                kind: IngredientKind::Simple { quantity, .. },
            }) => {
                let wanted = i64::from(*quantity) + amount;
                let clamped = wanted.clamp(0, i64::from(u32::MAX));
                if clamped != wanted {
                    tracing::warn!(ingredient = %name, wanted, "stock clamped to the u32 range");
                }
                *quantity = clamped as u32;
                return;
            }
            Some(Ingredient {
                kind: IngredientKind::Complex { bases, .. },
                ..
            }) => bases.clone(),
            None => {
                tracing::warn!(?id, "tried to restock an ingredient that is no longer stocked");
                return;
            }
        };

        let low = bases
            .iter()
            .map(|b| self.quantity(*b))
            .min()
            .unwrap_or(0);
        for base in bases {
            let surplus = i64::from(self.quantity(base)) - i64::from(low);
            self.order_more(base, amount - surplus);
        }
    }
}
