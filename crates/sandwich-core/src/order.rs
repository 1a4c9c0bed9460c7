use crate::cookbook::Cookbook;
use crate::fixed::{Cost, sum_costs};
use crate::pantry::Pantry;
use crate::sandwich::Sandwich;

/// A customer's order: made entirely or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    customer: String,
    sandwiches: Vec<Sandwich>,
    /// Refreshed by `add_sandwich` only.
    cached_total_cost: Cost,
}

impl Order {
    pub fn new(customer: &str) -> Self {
        Self {
            customer: customer.to_string(),
            sandwiches: Vec::new(),
            cached_total_cost: Cost::ZERO,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn sandwiches(&self) -> &[Sandwich] {
        &self.sandwiches
    }

    pub fn len(&self) -> usize {
        self.sandwiches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sandwiches.is_empty()
    }

    /// Append a sandwich and re-price the whole order. Returns its index.
    pub fn add_sandwich(&mut self, sandwich: Sandwich, cookbook: &Cookbook, pantry: &Pantry) -> usize {
        self.sandwiches.push(sandwich);
        self.cached_total_cost = sum_costs(
            Cost::ZERO,
            self.sandwiches.iter().map(|s| s.total_cost(cookbook, pantry)),
        );
        self.sandwiches.len() - 1
    }

    /// Remove the sandwich at `index`, if any.
    ///
    /// The cached total is left as it was; it is only refreshed by the next
    /// `add_sandwich`.
    pub fn remove_sandwich(&mut self, index: usize) -> Option<Sandwich> {
        if index >= self.sandwiches.len() {
            return None;
        }
        Some(self.sandwiches.remove(index))
    }

    /// The cached total from the last `add_sandwich`.
    pub fn total_cost(&self) -> Cost {
        self.cached_total_cost
    }

    /// Check every sandwich, then make every sandwich. If any check fails
    /// nothing is consumed.
    pub fn make_order(&self, cookbook: &Cookbook, pantry: &mut Pantry) -> bool {
        if !self.sandwiches.iter().all(|s| s.can_make(cookbook, pantry)) {
            tracing::debug!(customer = %self.customer, "order cannot be made");
            return false;
        }
        for sandwich in &self.sandwiches {
            sandwich.make(cookbook, pantry);
        }
        true
    }

    /// Whether every sandwich can be made one after another from the current
    /// stock. Runs the makes against a scratch copy of the pantry, so
    /// sandwiches competing for the same units are caught. Never mutates.
    pub fn can_make_together(&self, cookbook: &Cookbook, pantry: &Pantry) -> bool {
        let mut scratch = pantry.clone();
        self.sandwiches
            .iter()
            .all(|s| s.make(cookbook, &mut scratch))
    }

    /// `<customer> has made the following order:` followed by one line per sandwich.
    pub fn describe(&self, cookbook: &Cookbook, pantry: &Pantry) -> String {
        let mut text = format!("{} has made the following order:\n", self.customer);
        for sandwich in &self.sandwiches {
            text.push_str("\t-");
            text.push_str(&sandwich.describe(cookbook, pantry));
            text.push('\n');
        }
        text
    }
}
