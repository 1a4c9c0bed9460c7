use crate::cookbook::Cookbook;
use crate::fixed::Cost;
use crate::id::RecipeId;
use crate::pantry::Pantry;
use crate::recipe::ExclusionSet;
use crate::substitution::Substitution;

/// One recipe plus an optional substitution, priced and made as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sandwich {
    recipe: RecipeId,
    substitution: Option<Substitution>,
}

impl Sandwich {
    pub fn new(recipe: RecipeId) -> Self {
        Self {
            recipe,
            substitution: None,
        }
    }

    pub fn with_substitution(recipe: RecipeId, substitution: Substitution) -> Self {
        Self {
            recipe,
            substitution: Some(substitution),
        }
    }

    pub fn recipe(&self) -> RecipeId {
        self.recipe
    }

    pub fn substitution(&self) -> Option<&Substitution> {
        self.substitution.as_ref()
    }

    pub fn has_substitution(&self) -> bool {
        self.substitution.is_some()
    }

    fn exclusions(&self) -> ExclusionSet {
        self.substitution
            .as_ref()
            .map(Substitution::exclusions)
            .unwrap_or_default()
    }

    /// The recipe minus the removals, plus every addition, must be available.
    pub fn can_make(&self, cookbook: &Cookbook, pantry: &Pantry) -> bool {
        if !cookbook.can_make(self.recipe, pantry, &self.exclusions()) {
            return false;
        }
        self.substitution
            .as_ref()
            .is_none_or(|sub| sub.additions().iter().all(|i| pantry.can_use(*i)))
    }

    /// Make the recipe without the removals, then use each addition.
    /// Returns false with no stock change if [`Sandwich::can_make`] fails.
    pub fn make(&self, cookbook: &Cookbook, pantry: &mut Pantry) -> bool {
        if !self.can_make(cookbook, pantry) {
            return false;
        }
        if !cookbook.make(self.recipe, pantry, &self.exclusions()) {
            tracing::debug!(recipe = ?self.recipe, "recipe could not be made for sandwich");
        }
        if let Some(sub) = &self.substitution {
            for addition in sub.additions() {
                if !pantry.use_ingredient(*addition) {
                    tracing::debug!(ingredient = ?addition, "addition ran out mid-make");
                }
            }
        }
        true
    }

    /// Recipe total, plus additions, minus removals. Removals are subtracted
    /// unconditionally, even when the recipe has already removed them.
    pub fn total_cost(&self, cookbook: &Cookbook, pantry: &Pantry) -> Cost {
        let base = cookbook.total_cost(self.recipe, pantry);
        match &self.substitution {
            Some(sub) => base + sub.total_add_cost(pantry) - sub.total_remove_cost(pantry),
            None => base,
        }
    }

    /// e.g. `A Grilled Cheese sandwich with a substitution of added Ham.`
    pub fn describe(&self, cookbook: &Cookbook, pantry: &Pantry) -> String {
        let name = cookbook.name(self.recipe).unwrap_or("?");
        match &self.substitution {
            Some(sub) => format!("A {name} sandwich with {}", sub.describe(pantry)),
            None => format!("A {name} sandwich."),
        }
    }
}
