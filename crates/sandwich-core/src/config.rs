//! Shop configuration. Every field has a default so a config file only
//! needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::fixed::{Cost, checked_f64_to_cost};

pub const DEFAULT_SHOP_NAME: &str = "Defacto's Sandwich Bar";
pub const DEFAULT_FUNDS: f64 = 1000.0;
pub const DEFAULT_RESTOCK_FACTOR: u32 = 10;
pub const DEFAULT_MAX_ORDERS: u32 = 10_000;
pub const DEFAULT_MAX_SANDWICHES: u32 = 10;
pub const DEFAULT_MAX_SUBSTITUTIONS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub name: String,
    /// Starting funds in dollars.
    pub funds: f64,
    /// Units bought per ingredient on each restock.
    pub restock_factor: u32,
    /// Upper bound on orders in one simulation run.
    pub max_orders: u32,
    /// Most sandwiches a random order may contain.
    pub max_sandwiches: u32,
    /// Most substitution edits a random sandwich may carry.
    pub max_substitutions: u32,
    pub customer_names: Vec<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SHOP_NAME.to_string(),
            funds: DEFAULT_FUNDS,
            restock_factor: DEFAULT_RESTOCK_FACTOR,
            max_orders: DEFAULT_MAX_ORDERS,
            max_sandwiches: DEFAULT_MAX_SANDWICHES,
            max_substitutions: DEFAULT_MAX_SUBSTITUTIONS,
            customer_names: [
                "Bryan", "Nancy", "Jeff", "Hillary", "Rick", "Erin", "Greg", "Sarah", "Duncan",
                "Mabel", "Robbie", "Beth",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl ShopConfig {
    /// `funds` as a [`Cost`]. A value that is not finite or does not fit
    /// reads as zero; loaders reject such values before building a shop.
    pub fn starting_funds(&self) -> Cost {
        checked_f64_to_cost(self.funds).unwrap_or_else(|| {
            tracing::warn!(funds = self.funds, "starting funds out of range, using zero");
            Cost::ZERO
        })
    }
}
