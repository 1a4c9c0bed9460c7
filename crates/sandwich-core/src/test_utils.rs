//! Shared fixtures for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::fixed::{Cost, f64_to_cost};
use crate::id::{IngredientId, RecipeId};
use crate::kitchen::Kitchen;

pub fn cost(v: f64) -> Cost {
    f64_to_cost(v)
}

/// The grilled cheese kitchen: Bread ($1.00, x1), Cheese ($0.50, x0),
/// Ham ($1.00, x3), Grilled Cheese (Bread + Cheese, premium $0.50) and
/// Deluxe (Grilled Cheese, +Ham, -Cheese, premium $0.75).
pub struct Deli {
    pub kitchen: Kitchen,
    pub bread: IngredientId,
    pub cheese: IngredientId,
    pub ham: IngredientId,
    pub grilled_cheese: RecipeId,
    pub deluxe: RecipeId,
}

pub fn deli() -> Deli {
    let mut kitchen = Kitchen::new();
    let bread = kitchen
        .add_simple_ingredient("Bread", 1, cost(1.0))
        .expect("Bread");
    let cheese = kitchen
        .add_simple_ingredient("Cheese", 0, cost(0.5))
        .expect("Cheese");
    let ham = kitchen
        .add_simple_ingredient("Ham", 3, cost(1.0))
        .expect("Ham");
    let grilled_cheese = kitchen
        .register_simple_recipe("Grilled Cheese", vec![bread, cheese], cost(0.5))
        .expect("Grilled Cheese");
    let deluxe = kitchen
        .register_complex_recipe("Deluxe", vec![ham], grilled_cheese, vec![cheese], cost(0.75))
        .expect("Deluxe");
    Deli {
        kitchen,
        bread,
        cheese,
        ham,
        grilled_cheese,
        deluxe,
    }
}

/// A chain of `depth` complex recipes, each adding one fresh leaf on top of
/// the previous, over a base recipe of `width` leaves. Every leaf starts
/// with `stock` units costing $0.25. Returns the kitchen and the top recipe.
pub fn recipe_tower(depth: usize, width: usize, stock: u32) -> (Kitchen, RecipeId) {
    let mut kitchen = Kitchen::new();
    let leaves: Vec<IngredientId> = (0..width.max(1))
        .map(|i| {
            kitchen
                .add_simple_ingredient(&format!("leaf-{i}"), stock, cost(0.25))
                .expect("leaf")
        })
        .collect();
    let mut top = kitchen
        .register_simple_recipe("tier-0", leaves, cost(0.5))
        .expect("tier-0");
    for tier in 1..=depth {
        let topping = kitchen
            .add_simple_ingredient(&format!("topping-{tier}"), stock, cost(0.25))
            .expect("topping");
        top = kitchen
            .register_complex_recipe(&format!("tier-{tier}"), vec![topping], top, vec![], cost(0.1))
            .expect("tier");
    }
    (kitchen, top)
}
