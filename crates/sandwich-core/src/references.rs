//! Back-references: which composite nodes use a given node.
//!
//! When a node is registered, the tracker walks down from it and records,
//! on every node it reaches, the chain of composites that led there. The
//! walk happens once per registration, so a node's `used_by` list is a
//! snapshot of the composites registered on top of it so far. Removed
//! ingredients of a complex recipe are not walked; they are kept in a
//! separate `removed_by` index that only guards ingredient removal.

use std::collections::HashMap;

use crate::cookbook::Cookbook;
use crate::id::{FoodId, IngredientId, RecipeId};
use crate::pantry::Pantry;
use crate::recipe::RecipeKind;

/// `used_by` lists for every registered node, deduplicated, first-seen order.
#[derive(Debug, Default)]
pub struct ReferenceTracker {
    used_by: HashMap<FoodId, Vec<FoodId>>,
    /// Complex recipes listing an ingredient as removed.
    removed_by: HashMap<IngredientId, Vec<RecipeId>>,
}

impl ReferenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the registration pass for a freshly constructed node.
    pub fn register(&mut self, pantry: &Pantry, cookbook: &Cookbook, node: FoodId) {
        self.propagate(pantry, cookbook, node, &[]);
        let FoodId::Recipe(recipe) = node else {
            return;
        };
        if let Some(RecipeKind::Complex { removed, .. }) = cookbook.get(recipe).map(|r| &r.kind) {
            for ingredient in removed {
                let list = self.removed_by.entry(*ingredient).or_default();
                if !list.contains(&recipe) {
                    list.push(recipe);
                }
            }
        }
    }

    fn propagate(&mut self, pantry: &Pantry, cookbook: &Cookbook, node: FoodId, incoming: &[FoodId]) {
        let entry = self.used_by.entry(node).or_default();
        for reference in incoming {
            if !entry.contains(reference) {
                entry.push(*reference);
            }
        }

        let mut extended = incoming.to_vec();
        extended.push(node);
        for child in children(pantry, cookbook, node) {
            self.propagate(pantry, cookbook, child, &extended);
        }
    }

    /// Nodes that use `node`, directly or transitively, as of their registration.
    pub fn references(&self, node: FoodId) -> &[FoodId] {
        self.used_by.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_referenced(&self, node: FoodId) -> bool {
        !self.references(node).is_empty()
    }

    /// Complex recipes that remove `ingredient`. Not part of `references`.
    pub fn removed_by(&self, ingredient: IngredientId) -> &[RecipeId] {
        self.removed_by
            .get(&ingredient)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any recipe holds a handle to `node`, as a component or as a
    /// removal.
    pub fn is_held(&self, node: FoodId) -> bool {
        self.is_referenced(node)
            || matches!(node, FoodId::Ingredient(id) if !self.removed_by(id).is_empty())
    }

    /// Names of every recipe or ingredient holding a handle to `node`:
    /// `used_by` first, then recipes that only remove it.
    pub fn holder_names(&self, node: FoodId, pantry: &Pantry, cookbook: &Cookbook) -> Vec<String> {
        let mut names = self.reference_names(node, pantry, cookbook);
        if let FoodId::Ingredient(id) = node {
            for name in self.removed_by(id).iter().filter_map(|r| cookbook.name(*r)) {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Drop a node from the tracker, both its own list and every list it
    /// appears in.
    pub fn forget(&mut self, node: FoodId) {
        self.used_by.remove(&node);
        for list in self.used_by.values_mut() {
            list.retain(|other| *other != node);
        }
        match node {
            FoodId::Ingredient(id) => {
                self.removed_by.remove(&id);
            }
            FoodId::Recipe(id) => {
                for list in self.removed_by.values_mut() {
                    list.retain(|other| *other != id);
                }
            }
        }
    }

    /// `{A, B}` using node names, or `None` when nothing uses the node.
    pub fn printable_references(&self, node: FoodId, pantry: &Pantry, cookbook: &Cookbook) -> String {
        let names = self.reference_names(node, pantry, cookbook);
        if names.is_empty() {
            "None".to_string()
        } else {
            format!("{{{}}}", names.join(", "))
        }
    }

    pub fn reference_names(&self, node: FoodId, pantry: &Pantry, cookbook: &Cookbook) -> Vec<String> {
        self.references(node)
            .iter()
            .filter_map(|r| food_name(*r, pantry, cookbook))
            .map(str::to_string)
            .collect()
    }
}

/// Display name of any node.
pub fn food_name<'a>(node: FoodId, pantry: &'a Pantry, cookbook: &'a Cookbook) -> Option<&'a str> {
    match node {
        FoodId::Ingredient(id) => pantry.name(id),
        FoodId::Recipe(id) => cookbook.name(id),
    }
}

/// The structural children walked by the registration pass.
fn children(pantry: &Pantry, cookbook: &Cookbook, node: FoodId) -> Vec<FoodId> {
    match node {
        FoodId::Ingredient(id) => pantry
            .get(id)
            .map(|i| i.bases().iter().map(|b| FoodId::Ingredient(*b)).collect())
            .unwrap_or_default(),
        FoodId::Recipe(id) => match cookbook.get(id).map(|r| &r.kind) {
            Some(RecipeKind::Simple { ingredients }) => {
                ingredients.iter().map(|i| FoodId::Ingredient(*i)).collect()
            }
            Some(RecipeKind::Complex { base, added, .. }) => std::iter::once(FoodId::Recipe(*base))
                .chain(added.iter().map(|i| FoodId::Ingredient(*i)))
                .collect(),
            None => Vec::new(),
        },
    }
}
