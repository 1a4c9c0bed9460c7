//! Events recorded by the shop as orders flow through it.

use crate::fixed::Cost;
use crate::id::IngredientId;

/// Events emitted by [`crate::shop::Shop`]. Drained by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    /// An order was made and paid for.
    OrderCompleted { customer: String, revenue: Cost },

    /// An order could not be made from current stock.
    OrderRejected { customer: String },

    /// Stock was bought for an ingredient.
    Restocked {
        ingredient: IngredientId,
        amount: u32,
        spent: Cost,
    },

    /// Funds ran out partway through a restock.
    Bankrupt { funds: Cost, needed: Cost },
}
