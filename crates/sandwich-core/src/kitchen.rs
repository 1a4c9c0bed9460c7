//! The kitchen ties the pantry, the cookbook and the reference tracker
//! together.
//!
//! Every construction call goes through here so that the back-reference
//! registration pass runs exactly once per node, right after the node is
//! inserted into its arena.

use crate::cookbook::Cookbook;
use crate::error::KitchenError;
use crate::fixed::Cost;
use crate::id::{FoodId, IngredientId, RecipeId};
use crate::ingredient::Ingredient;
use crate::order::Order;
use crate::pantry::Pantry;
use crate::recipe::ExclusionSet;
use crate::references::{ReferenceTracker, food_name};
use crate::report::{IngredientDetail, IngredientStatus, RecipeDetail, RecipeStatus};
use crate::sandwich::Sandwich;

#[derive(Debug, Default)]
pub struct Kitchen {
    pantry: Pantry,
    cookbook: Cookbook,
    references: ReferenceTracker,
    /// Ingredients and recipes constructed over the kitchen's lifetime.
    created: u64,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// Mutable pantry access for stock operations (`use_ingredient`,
    /// `order_more`). Construction must go through the kitchen.
    pub fn pantry_mut(&mut self) -> &mut Pantry {
        &mut self.pantry
    }

    pub fn cookbook(&self) -> &Cookbook {
        &self.cookbook
    }

    pub fn references(&self) -> &ReferenceTracker {
        &self.references
    }

    /// Number of ingredients and recipes constructed so far. Removals do not
    /// decrease it.
    pub fn created_count(&self) -> u64 {
        self.created
    }

    fn registered(&mut self, node: FoodId) {
        self.references.register(&self.pantry, &self.cookbook, node);
        self.created += 1;
        tracing::debug!(
            node = food_name(node, &self.pantry, &self.cookbook).unwrap_or("?"),
            "registered"
        );
    }

    // -- Inventory boundary --

    pub fn get_ingredient(&self, name: &str) -> Option<IngredientId> {
        self.pantry.get_ingredient(name)
    }

    pub fn add_simple_ingredient(
        &mut self,
        name: &str,
        quantity: u32,
        cost: Cost,
    ) -> Result<IngredientId, KitchenError> {
        let id = self.pantry.add_simple(name, quantity, cost)?;
        self.registered(id.into());
        Ok(id)
    }

    pub fn add_complex_ingredient(
        &mut self,
        name: &str,
        premium: Cost,
        bases: Vec<IngredientId>,
    ) -> Result<IngredientId, KitchenError> {
        let id = self.pantry.add_complex(name, premium, bases)?;
        self.registered(id.into());
        Ok(id)
    }

    /// Remove an ingredient by name. Refused while any recipe or complex
    /// ingredient still uses it, or any complex recipe lists it as removed.
    pub fn remove_ingredient(&mut self, name: &str) -> Result<Ingredient, KitchenError> {
        let id = self
            .pantry
            .get_ingredient(name)
            .ok_or_else(|| KitchenError::UnknownIngredient(name.to_string()))?;
        let node = FoodId::Ingredient(id);
        if self.references.is_held(node) {
            return Err(KitchenError::IngredientInUse {
                name: name.to_string(),
                used_by: self
                    .references
                    .holder_names(node, &self.pantry, &self.cookbook),
            });
        }
        let removed = self
            .pantry
            .remove(id)
            .ok_or(KitchenError::MissingIngredient(id))?;
        self.references.forget(node);
        tracing::debug!(ingredient = name, "removed from pantry");
        Ok(removed)
    }

    /// Resolve a list of ingredient names, failing on the first unknown one.
    pub fn resolve_ingredients<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<IngredientId>, KitchenError> {
        names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                self.pantry
                    .get_ingredient(n)
                    .ok_or_else(|| KitchenError::UnknownIngredient(n.to_string()))
            })
            .collect()
    }

    // -- Recipe registry boundary --

    pub fn register_simple_recipe(
        &mut self,
        name: &str,
        ingredients: Vec<IngredientId>,
        premium: Cost,
    ) -> Result<RecipeId, KitchenError> {
        let id = self
            .cookbook
            .register_simple(&self.pantry, name, ingredients, premium)?;
        self.registered(id.into());
        Ok(id)
    }

    pub fn register_complex_recipe(
        &mut self,
        name: &str,
        added: Vec<IngredientId>,
        base: RecipeId,
        removed: Vec<IngredientId>,
        premium: Cost,
    ) -> Result<RecipeId, KitchenError> {
        let id = self
            .cookbook
            .register_complex(&self.pantry, name, added, base, removed, premium)?;
        self.registered(id.into());
        Ok(id)
    }

    pub fn find_recipe(&self, name: &str) -> Option<RecipeId> {
        self.cookbook.find_recipe(name)
    }

    /// Look a name up as an ingredient first, then as a recipe.
    pub fn lookup(&self, name: &str) -> Option<FoodId> {
        self.pantry
            .get_ingredient(name)
            .map(FoodId::Ingredient)
            .or_else(|| self.cookbook.find_recipe(name).map(FoodId::Recipe))
    }

    // -- Back-references --

    pub fn used_by(&self, node: impl Into<FoodId>) -> &[FoodId] {
        self.references.references(node.into())
    }

    pub fn printable_references(&self, node: impl Into<FoodId>) -> String {
        self.references
            .printable_references(node.into(), &self.pantry, &self.cookbook)
    }

    // -- Recipe, sandwich and order operations --

    pub fn total_cost(&self, recipe: RecipeId) -> Cost {
        self.cookbook.total_cost(recipe, &self.pantry)
    }

    pub fn raw_cost(&self, recipe: RecipeId) -> Cost {
        self.cookbook.raw_cost(recipe, &self.pantry)
    }

    pub fn can_make(&self, recipe: RecipeId, exclude: &ExclusionSet) -> bool {
        self.cookbook.can_make(recipe, &self.pantry, exclude)
    }

    pub fn make(&mut self, recipe: RecipeId, exclude: &ExclusionSet) -> bool {
        self.cookbook.make(recipe, &mut self.pantry, exclude)
    }

    pub fn ingredients(&self, recipe: RecipeId) -> Vec<IngredientId> {
        self.cookbook.ingredients(recipe)
    }

    pub fn contains_ingredient(&self, recipe: RecipeId, name: &str) -> bool {
        self.cookbook.contains_ingredient(recipe, &self.pantry, name)
    }

    pub fn sandwich_cost(&self, sandwich: &Sandwich) -> Cost {
        sandwich.total_cost(&self.cookbook, &self.pantry)
    }

    pub fn can_make_sandwich(&self, sandwich: &Sandwich) -> bool {
        sandwich.can_make(&self.cookbook, &self.pantry)
    }

    pub fn make_sandwich(&mut self, sandwich: &Sandwich) -> bool {
        sandwich.make(&self.cookbook, &mut self.pantry)
    }

    /// Append a sandwich to an order, pricing it against current costs.
    pub fn add_sandwich(&self, order: &mut Order, sandwich: Sandwich) -> usize {
        order.add_sandwich(sandwich, &self.cookbook, &self.pantry)
    }

    pub fn make_order(&mut self, order: &Order) -> bool {
        order.make_order(&self.cookbook, &mut self.pantry)
    }

    pub fn can_make_order_together(&self, order: &Order) -> bool {
        order.can_make_together(&self.cookbook, &self.pantry)
    }

    pub fn describe_order(&self, order: &Order) -> String {
        order.describe(&self.cookbook, &self.pantry)
    }

    // -- Diagnostics --

    pub fn ingredient_status(&self, id: IngredientId) -> Result<IngredientStatus, KitchenError> {
        let ingredient = self
            .pantry
            .get(id)
            .ok_or(KitchenError::MissingIngredient(id))?;
        Ok(IngredientStatus {
            name: ingredient.name.clone(),
            cost: self.pantry.cost(id),
            quantity: self.pantry.quantity(id),
        })
    }

    pub fn ingredient_detail(&self, id: IngredientId) -> Result<IngredientDetail, KitchenError> {
        let status = self.ingredient_status(id)?;
        let uses = self
            .pantry
            .get(id)
            .map(|i| self.ingredient_names(i.bases()))
            .unwrap_or_default();
        Ok(IngredientDetail {
            status,
            uses,
            referenced_by: self
                .references
                .reference_names(id.into(), &self.pantry, &self.cookbook),
        })
    }

    pub fn recipe_status(&self, id: RecipeId) -> Result<RecipeStatus, KitchenError> {
        let recipe = self.cookbook.get(id).ok_or(KitchenError::MissingRecipe(id))?;
        Ok(RecipeStatus {
            name: recipe.name.clone(),
            total_cost: self.total_cost(id),
            raw_cost: self.raw_cost(id),
            can_make: self.can_make(id, &ExclusionSet::new()),
            based_on: recipe
                .base()
                .and_then(|b| self.cookbook.name(b))
                .map(str::to_string),
        })
    }

    pub fn recipe_detail(&self, id: RecipeId) -> Result<RecipeDetail, KitchenError> {
        let status = self.recipe_status(id)?;
        Ok(RecipeDetail {
            status,
            uses: self.ingredient_names(&self.cookbook.ingredients(id)),
            referenced_by: self
                .references
                .reference_names(id.into(), &self.pantry, &self.cookbook),
        })
    }

    /// `INVENTORY DETAILS` listing, one `name: xN` line per ingredient.
    pub fn inventory_report(&self) -> String {
        let mut text = String::from("INVENTORY DETAILS\n----------------------------------\n");
        if self.pantry.is_empty() {
            text.push_str("No items in inventory.");
            return text;
        }
        for (id, ingredient) in self.pantry.iter() {
            text.push_str(&format!("{}: x{}\n", ingredient.name, self.pantry.quantity(id)));
        }
        text
    }

    /// `RECIPE DETAILS` listing, one detail block per recipe.
    pub fn recipe_report(&self) -> String {
        let mut text = String::from("RECIPE DETAILS\n----------------------------------\n");
        if self.cookbook.is_empty() {
            text.push_str("No recipes are present.\n");
            return text;
        }
        for id in self.cookbook.ids() {
            if let Ok(detail) = self.recipe_detail(*id) {
                text.push_str(&detail.to_string());
            }
        }
        text
    }

    fn ingredient_names(&self, ids: &[IngredientId]) -> Vec<String> {
        ids.iter()
            .filter_map(|i| self.pantry.name(*i))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::f64_to_cost;

    fn kitchen() -> (Kitchen, IngredientId, IngredientId, RecipeId) {
        let mut k = Kitchen::new();
        let bread = k.add_simple_ingredient("Bread", 1, f64_to_cost(1.0)).unwrap();
        let cheese = k.add_simple_ingredient("Cheese", 0, f64_to_cost(0.5)).unwrap();
        let grilled = k
            .register_simple_recipe("Grilled Cheese", vec![bread, cheese], f64_to_cost(0.5))
            .unwrap();
        (k, bread, cheese, grilled)
    }

    #[test]
    fn registration_fills_used_by() {
        let (k, bread, cheese, grilled) = kitchen();
        assert_eq!(k.used_by(bread), &[FoodId::from(grilled)]);
        assert_eq!(k.used_by(cheese), &[FoodId::from(grilled)]);
        assert!(k.used_by(grilled).is_empty());
        assert_eq!(k.printable_references(bread), "{Grilled Cheese}");
        assert_eq!(k.created_count(), 3);
    }

    #[test]
    fn remove_refused_while_in_use() {
        let (mut k, _, _, _) = kitchen();
        let err = k.remove_ingredient("Cheese").unwrap_err();
        assert_eq!(
            err,
            KitchenError::IngredientInUse {
                name: "Cheese".to_string(),
                used_by: vec!["Grilled Cheese".to_string()],
            }
        );
        assert!(k.get_ingredient("Cheese").is_some());
    }

    #[test]
    fn remove_unused_ingredient() {
        let (mut k, _, _, _) = kitchen();
        k.add_simple_ingredient("Olive", 3, f64_to_cost(0.25)).unwrap();
        let olive = k.remove_ingredient("Olive").unwrap();
        assert_eq!(olive.name, "Olive");
        assert!(k.get_ingredient("Olive").is_none());
        assert_eq!(
            k.remove_ingredient("Olive"),
            Err(KitchenError::UnknownIngredient("Olive".to_string()))
        );
        assert_eq!(k.created_count(), 4);
    }

    #[test]
    fn resolve_ingredients_reports_unknown() {
        let (k, bread, cheese, _) = kitchen();
        assert_eq!(k.resolve_ingredients(&["Bread", "Cheese"]), Ok(vec![bread, cheese]));
        assert_eq!(
            k.resolve_ingredients(&["Bread", "Tofu"]),
            Err(KitchenError::UnknownIngredient("Tofu".to_string()))
        );
    }

    #[test]
    fn lookup_prefers_ingredients() {
        let (k, bread, _, grilled) = kitchen();
        assert_eq!(k.lookup("Bread"), Some(FoodId::Ingredient(bread)));
        assert_eq!(k.lookup("Grilled Cheese"), Some(FoodId::Recipe(grilled)));
        assert_eq!(k.lookup("Nope"), None);
    }

    #[test]
    fn recipe_status_and_detail() {
        let (k, _, _, grilled) = kitchen();
        let status = k.recipe_status(grilled).unwrap();
        assert_eq!(status.total_cost, f64_to_cost(2.0));
        assert_eq!(status.raw_cost, f64_to_cost(1.5));
        assert!(!status.can_make);
        let detail = k.recipe_detail(grilled).unwrap();
        assert_eq!(detail.uses, vec!["Bread".to_string(), "Cheese".to_string()]);
        assert!(detail.referenced_by.is_empty());
    }

    #[test]
    fn ingredient_detail_for_complex() {
        let (mut k, bread, cheese, _) = kitchen();
        let melt = k
            .add_complex_ingredient("Melt", f64_to_cost(0.25), vec![bread, cheese])
            .unwrap();
        let detail = k.ingredient_detail(melt).unwrap();
        assert_eq!(detail.status.cost, f64_to_cost(1.75));
        assert_eq!(detail.status.quantity, 0);
        assert_eq!(detail.uses, vec!["Bread".to_string(), "Cheese".to_string()]);
        assert_eq!(
            k.ingredient_detail(bread).unwrap().referenced_by,
            vec!["Grilled Cheese".to_string(), "Melt".to_string()]
        );
    }

    #[test]
    fn inventory_report_lists_stock() {
        let (k, _, _, _) = kitchen();
        assert_eq!(
            k.inventory_report(),
            "INVENTORY DETAILS\n----------------------------------\nBread: x1\nCheese: x0\n"
        );
        assert!(Kitchen::new().inventory_report().ends_with("No items in inventory."));
    }

    #[test]
    fn recipe_report_lists_details() {
        let (k, _, _, _) = kitchen();
        let report = k.recipe_report();
        assert!(report.starts_with("RECIPE DETAILS\n"));
        assert!(report.contains("Grilled Cheese:\n\t- Total Cost: $2.00\n"));
        assert!(report.contains("\t- Cannot Make\n"));
        assert!(Kitchen::new().recipe_report().ends_with("No recipes are present.\n"));
    }
}
