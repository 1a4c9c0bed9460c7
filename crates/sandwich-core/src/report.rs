//! Read-only snapshots for the diagnostic surface.
//!
//! Each snapshot is taken at a point in time by `Kitchen` and renders
//! itself through `Display`: statuses on a single line, details as an
//! indented block.

use std::fmt;

use crate::fixed::{Cost, format_dollars};

/// One-line view of an ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientStatus {
    pub name: String,
    pub cost: Cost,
    pub quantity: u32,
}

impl fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: cost {}, x{}",
            self.name,
            format_dollars(self.cost),
            self.quantity
        )
    }
}

/// Full view of an ingredient: status, bases and back-references.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDetail {
    pub status: IngredientStatus,
    /// Base ingredient names. Empty for simple ingredients.
    pub uses: Vec<String>,
    pub referenced_by: Vec<String>,
}

impl fmt::Display for IngredientDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.status.name)?;
        writeln!(f, "\t- Total Cost: {}", format_dollars(self.status.cost))?;
        writeln!(f, "\t- Quantity: x{}", self.status.quantity)?;
        if !self.uses.is_empty() {
            writeln!(f, "\t- Uses: {}", braces(&self.uses))?;
        }
        writeln!(f, "\t- Referenced By: {}", references(&self.referenced_by))
    }
}

/// One-line view of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStatus {
    pub name: String,
    pub total_cost: Cost,
    pub raw_cost: Cost,
    pub can_make: bool,
    /// Base recipe name for complex recipes.
    pub based_on: Option<String>,
}

impl fmt::Display for RecipeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: total {}, raw {}, {}",
            self.name,
            format_dollars(self.total_cost),
            format_dollars(self.raw_cost),
            if self.can_make { "can make" } else { "cannot make" }
        )?;
        if let Some(base) = &self.based_on {
            write!(f, ", based on {base}")?;
        }
        Ok(())
    }
}

/// Full view of a recipe: status, effective ingredients and back-references.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub status: RecipeStatus,
    pub uses: Vec<String>,
    pub referenced_by: Vec<String>,
}

impl fmt::Display for RecipeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.status.name)?;
        writeln!(f, "\t- Total Cost: {}", format_dollars(self.status.total_cost))?;
        writeln!(
            f,
            "\t- Raw Ingredient Cost: {}",
            format_dollars(self.status.raw_cost)
        )?;
        writeln!(
            f,
            "\t- {}",
            if self.status.can_make { "Can Make" } else { "Cannot Make" }
        )?;
        if let Some(base) = &self.status.based_on {
            writeln!(f, "\t- Based On: {base}")?;
        }
        writeln!(f, "\t- Uses: {}", braces(&self.uses))?;
        writeln!(f, "\t- Referenced By: {}", references(&self.referenced_by))
    }
}

fn braces(names: &[String]) -> String {
    format!("{{{}}}", names.join(", "))
}

fn references(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        braces(names)
    }
}
