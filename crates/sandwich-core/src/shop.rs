//! The shop: a kitchen plus funds, restocking and simulated customers.
//!
//! Orders are made through [`Shop::take_order`]. When stock runs short,
//! [`Shop::restock`] buys `restock_factor` units of every ingredient the
//! order touches, paying `restock_factor * cost` per ingredient, and stops at
//! the first ingredient it cannot afford. [`Shop::simulate`] drives both with
//! seeded random orders.

use std::fmt;

use crate::config::ShopConfig;
use crate::error::KitchenError;
use crate::event::ShopEvent;
use crate::fixed::{Cost, format_dollars, scale_cost};
use crate::id::{IngredientId, RecipeId};
use crate::kitchen::Kitchen;
use crate::order::Order;
use crate::rng::ShopRng;
use crate::sandwich::Sandwich;
use crate::substitution::Substitution;

#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("no recipe named '{0}'")]
    UnknownRecipe(String),

    #[error("no ingredient named '{0}'")]
    UnknownIngredient(String),

    #[error("'{recipe}' already has {ingredient}")]
    AlreadyInRecipe { recipe: String, ingredient: String },

    #[error("'{recipe}' does not have {ingredient}")]
    NotInRecipe { recipe: String, ingredient: String },

    #[error("too few recipes to simulate")]
    NoRecipes,

    #[error(transparent)]
    Kitchen(#[from] KitchenError),
}

/// What happened to an order passed to [`Shop::fulfil`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Made from existing stock.
    Completed,
    /// Made after a restock.
    CompletedAfterRestock,
    /// Restocked, but still not makeable. No revenue.
    StillShort,
    /// Funds ran out while restocking. No revenue.
    Bankrupt,
}

/// Tally of a [`Shop::simulate`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub orders: u32,
    pub completed: u32,
    pub completed_after_restock: u32,
    pub still_short: u32,
    pub bankrupt: bool,
    pub starting_funds: Cost,
    pub final_funds: Cost,
}

impl SimulationReport {
    fn new(starting_funds: Cost) -> Self {
        Self {
            orders: 0,
            completed: 0,
            completed_after_restock: 0,
            still_short: 0,
            bankrupt: false,
            starting_funds,
            final_funds: starting_funds,
        }
    }

    fn record(&mut self, outcome: OrderOutcome) {
        self.orders += 1;
        match outcome {
            OrderOutcome::Completed => self.completed += 1,
            OrderOutcome::CompletedAfterRestock => self.completed_after_restock += 1,
            OrderOutcome::StillShort => self.still_short += 1,
            OrderOutcome::Bankrupt => self.bankrupt = true,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} orders: {} completed, {} after restock, {} short; funds {} -> {}",
            self.orders,
            self.completed,
            self.completed_after_restock,
            self.still_short,
            format_dollars(self.starting_funds),
            format_dollars(self.final_funds)
        )?;
        if self.bankrupt {
            write!(f, " (bankrupt)")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Shop {
    config: ShopConfig,
    funds: Cost,
    kitchen: Kitchen,
    /// Events since the last drain.
    events: Vec<ShopEvent>,
    rng: ShopRng,
}

impl Shop {
    pub fn new(config: ShopConfig, kitchen: Kitchen, seed: u64) -> Self {
        let funds = config.starting_funds();
        Self {
            config,
            funds,
            kitchen,
            events: Vec::new(),
            rng: ShopRng::new(seed),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn rename(&mut self, name: &str) {
        self.config.name = name.to_string();
    }

    pub fn funds(&self) -> Cost {
        self.funds
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn kitchen(&self) -> &Kitchen {
        &self.kitchen
    }

    pub fn kitchen_mut(&mut self) -> &mut Kitchen {
        &mut self.kitchen
    }

    /// Name and funds, one per line.
    pub fn details(&self) -> String {
        format!("{}\nFunds: {}", self.config.name, format_dollars(self.funds))
    }

    // -- Event API --

    pub fn drain_events(&mut self) -> Vec<ShopEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[ShopEvent] {
        &self.events
    }

    // -- Orders --

    /// Make the order and take payment for it. Nothing changes if the stock
    /// cannot cover every sandwich in turn.
    pub fn take_order(&mut self, order: &Order) -> bool {
        if !self.kitchen.can_make_order_together(order) || !self.kitchen.make_order(order) {
            self.events.push(ShopEvent::OrderRejected {
                customer: order.customer().to_string(),
            });
            return false;
        }
        let revenue = order.total_cost();
        self.funds = self.funds.saturating_add(revenue);
        tracing::info!(
            customer = order.customer(),
            revenue = %format_dollars(revenue),
            "order completed"
        );
        self.events.push(ShopEvent::OrderCompleted {
            customer: order.customer().to_string(),
            revenue,
        });
        true
    }

    /// Buy `restock_factor` more of every ingredient the order uses: each
    /// recipe's effective ingredients, then each substitution addition.
    /// Returns false as soon as one purchase is unaffordable; purchases
    /// already made stay made.
    pub fn restock(&mut self, order: &Order) -> bool {
        let factor = self.config.restock_factor;
        for sandwich in order.sandwiches() {
            let mut needed = self.kitchen.ingredients(sandwich.recipe());
            if let Some(sub) = sandwich.substitution() {
                needed.extend_from_slice(sub.additions());
            }
            for ingredient in needed {
                if !self.buy(ingredient, factor) {
                    return false;
                }
            }
        }
        tracing::info!(
            customer = order.customer(),
            funds = %format_dollars(self.funds),
            "restocked"
        );
        true
    }

    fn buy(&mut self, ingredient: IngredientId, amount: u32) -> bool {
        let price = scale_cost(self.kitchen.pantry().cost(ingredient), amount);
        if self.funds < price {
            tracing::warn!(
                shop = %self.config.name,
                funds = %format_dollars(self.funds),
                needed = %format_dollars(price),
                "cannot afford restock"
            );
            self.events.push(ShopEvent::Bankrupt {
                funds: self.funds,
                needed: price,
            });
            return false;
        }
        self.funds -= price;
        self.kitchen
            .pantry_mut()
            .order_more(ingredient, i64::from(amount));
        self.events.push(ShopEvent::Restocked {
            ingredient,
            amount,
            spent: price,
        });
        true
    }

    /// Take the order, restocking and retrying once if it cannot be made.
    pub fn fulfil(&mut self, order: &Order) -> OrderOutcome {
        if self.take_order(order) {
            return OrderOutcome::Completed;
        }
        tracing::debug!(customer = order.customer(), "not enough stock, ordering more");
        if !self.restock(order) {
            return OrderOutcome::Bankrupt;
        }
        if self.take_order(order) {
            OrderOutcome::CompletedAfterRestock
        } else {
            OrderOutcome::StillShort
        }
    }

    /// Build a validated substitution for a recipe from ingredient names.
    ///
    /// An addition the recipe already contains, or a removal it does not, is
    /// rejected. Containment is `Kitchen::contains_ingredient`, which only
    /// looks at a complex recipe's own additions.
    pub fn build_substitution<S: AsRef<str>>(
        &self,
        recipe: &str,
        additions: &[S],
        removals: &[S],
    ) -> Result<(RecipeId, Substitution), ShopError> {
        let id = self
            .kitchen
            .find_recipe(recipe)
            .ok_or_else(|| ShopError::UnknownRecipe(recipe.to_string()))?;
        let mut substitution = Substitution::new();
        for name in additions {
            let name = name.as_ref();
            if self.kitchen.contains_ingredient(id, name) {
                return Err(ShopError::AlreadyInRecipe {
                    recipe: recipe.to_string(),
                    ingredient: name.to_string(),
                });
            }
            substitution.add_addition(self.ingredient(name)?);
        }
        for name in removals {
            let name = name.as_ref();
            if !self.kitchen.contains_ingredient(id, name) {
                return Err(ShopError::NotInRecipe {
                    recipe: recipe.to_string(),
                    ingredient: name.to_string(),
                });
            }
            substitution.add_removal(self.ingredient(name)?);
        }
        Ok((id, substitution))
    }

    fn ingredient(&self, name: &str) -> Result<IngredientId, ShopError> {
        self.kitchen
            .get_ingredient(name)
            .ok_or_else(|| ShopError::UnknownIngredient(name.to_string()))
    }

    // -- Simulation --

    /// A random order: random customer, one to `max_sandwiches` sandwiches.
    pub fn random_order(&mut self) -> Result<Order, ShopError> {
        if self.kitchen.cookbook().is_empty() {
            return Err(ShopError::NoRecipes);
        }
        let customer = self
            .rng
            .choose(&self.config.customer_names)
            .cloned()
            .unwrap_or_else(|| "Customer".to_string());
        let mut order = Order::new(&customer);
        let count = self.rng.between_one_and(self.config.max_sandwiches as usize);
        for _ in 0..count {
            let sandwich = self.random_sandwich()?;
            self.kitchen.add_sandwich(&mut order, sandwich);
        }
        Ok(order)
    }

    /// Half the time a plain sandwich; otherwise up to `max_substitutions`
    /// edits, each an addition of a stocked ingredient not already in the
    /// recipe or a removal of one that is.
    fn random_sandwich(&mut self) -> Result<Sandwich, ShopError> {
        let recipe = self
            .rng
            .choose(self.kitchen.cookbook().ids())
            .copied()
            .ok_or(ShopError::NoRecipes)?;
        if self.rng.flip() {
            return Ok(Sandwich::new(recipe));
        }

        let ingredients = self.kitchen.ingredients(recipe);
        let mut substitution = Substitution::new();
        let edits = self
            .rng
            .between_one_and(self.config.max_substitutions as usize);
        for _ in 0..edits {
            let candidates: Vec<IngredientId> = if self.rng.flip() {
                self.kitchen
                    .pantry()
                    .ids()
                    .iter()
                    .copied()
                    .filter(|i| !ingredients.contains(i) && !substitution.additions().contains(i))
                    .collect()
            } else {
                ingredients
                    .iter()
                    .copied()
                    .filter(|i| !substitution.removals().contains(i))
                    .collect()
            };
            let Some(pick) = self.rng.choose(&candidates).copied() else {
                continue;
            };
            if ingredients.contains(&pick) {
                substitution.add_removal(pick);
            } else {
                substitution.add_addition(pick);
            }
        }

        if substitution.is_empty() {
            Ok(Sandwich::new(recipe))
        } else {
            Ok(Sandwich::with_substitution(recipe, substitution))
        }
    }

    /// Run `orders` random orders (capped at `max_orders`), stopping early on
    /// bankruptcy.
    pub fn simulate(&mut self, orders: u32) -> Result<SimulationReport, ShopError> {
        let orders = orders.min(self.config.max_orders);
        let mut report = SimulationReport::new(self.funds);
        for _ in 0..orders {
            let order = self.random_order()?;
            tracing::debug!(order = %self.kitchen.describe_order(&order), "simulating");
            let outcome = self.fulfil(&order);
            report.record(outcome);
            if outcome == OrderOutcome::Bankrupt {
                tracing::warn!(shop = %self.config.name, "gone bankrupt");
                break;
            }
        }
        report.final_funds = self.funds;
        tracing::info!(%report, "simulation finished");
        Ok(report)
    }
}
