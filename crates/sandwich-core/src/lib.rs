//! Sandwich Core -- the composition engine for a sandwich shop.
//!
//! Ingredients and recipes form a graph. Costs and availability are derived
//! recursively through it, a substitution or a derived recipe skips
//! ingredients through an exclusion set without mutating anything, and
//! every construction records which composites use which nodes.
//!
//! # Key Types
//!
//! - [`pantry::Pantry`] -- Arena of simple and complex ingredients, with
//!   stock-levelling restocks.
//! - [`cookbook::Cookbook`] -- Arena of simple and complex recipes and the
//!   exclusion-aware cost, availability and consumption rules.
//! - [`references::ReferenceTracker`] -- Construction-time back-references.
//! - [`kitchen::Kitchen`] -- Owns the three above and keeps them in step.
//! - [`order::Order`] / [`sandwich::Sandwich`] /
//!   [`substitution::Substitution`] -- Order-time composition, made
//!   all-or-nothing.
//! - [`shop::Shop`] -- Funds, restocking and seeded order simulation.
//! - [`fixed::Cost`] -- Q32.32 fixed-point money.
//!
//! # Handles
//!
//! Nodes are addressed by generational keys ([`id::IngredientId`],
//! [`id::RecipeId`]). A handle whose node was removed is stale: costs read
//! as zero, availability as false, and mutations are ignored.

pub mod config;
pub mod cookbook;
pub mod error;
pub mod event;
pub mod fixed;
pub mod id;
pub mod ingredient;
pub mod kitchen;
pub mod order;
pub mod pantry;
pub mod recipe;
pub mod references;
pub mod report;
pub mod rng;
pub mod sandwich;
pub mod shop;
pub mod substitution;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
