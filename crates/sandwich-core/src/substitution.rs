use crate::fixed::{Cost, sum_costs};
use crate::id::IngredientId;
use crate::pantry::Pantry;
use crate::recipe::ExclusionSet;

/// Order-time additions and removals against a recipe.
///
/// Nothing is validated here: an addition may already be in the recipe and
/// a removal may not be. Callers that care check with
/// `Cookbook::contains_ingredient` before appending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    additions: Vec<IngredientId>,
    removals: Vec<IngredientId>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(additions: Vec<IngredientId>, removals: Vec<IngredientId>) -> Self {
        Self {
            additions,
            removals,
        }
    }

    pub fn add_addition(&mut self, ingredient: IngredientId) {
        self.additions.push(ingredient);
    }

    pub fn add_removal(&mut self, ingredient: IngredientId) {
        self.removals.push(ingredient);
    }

    pub fn additions(&self) -> &[IngredientId] {
        &self.additions
    }

    pub fn removals(&self) -> &[IngredientId] {
        &self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// The removals as an exclusion set for recipe checks.
    pub fn exclusions(&self) -> ExclusionSet {
        self.removals.iter().copied().collect()
    }

    pub fn total_add_cost(&self, pantry: &Pantry) -> Cost {
        sum_costs(Cost::ZERO, self.additions.iter().map(|i| pantry.cost(*i)))
    }

    pub fn total_remove_cost(&self, pantry: &Pantry) -> Cost {
        sum_costs(Cost::ZERO, self.removals.iter().map(|i| pantry.cost(*i)))
    }

    /// e.g. `a substitution of added Ham, and Pickle and no Cheese.`
    pub fn describe(&self, pantry: &Pantry) -> String {
        let mut text = String::from("a substitution of");
        if !self.additions.is_empty() {
            text.push_str(" added ");
            text.push_str(&join_names(pantry, &self.additions, "and"));
        }
        if !self.removals.is_empty() {
            if !self.additions.is_empty() {
                text.push_str(" and");
            }
            text.push_str(" no ");
            text.push_str(&join_names(pantry, &self.removals, "or"));
        }
        text.push('.');
        text
    }
}

/// `A`, `A and B`, `A, B, and C`.
fn join_names(pantry: &Pantry, ids: &[IngredientId], last: &str) -> String {
    let names: Vec<&str> = ids
        .iter()
        .map(|i| pantry.name(*i).unwrap_or("?"))
        .collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{a} {last} {b}"),
        [init @ .., tail] => format!("{}, {last} {tail}", init.join(", ")),
    }
}
