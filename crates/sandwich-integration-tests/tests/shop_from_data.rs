//! Integration test: a shop loaded from data files, driven by hand and by
//! the simulator.
//!
//! Uses the sample deli shipped with `sandwich-data`, so a change to those
//! files shows up here.

use std::path::PathBuf;

use fixed::types::I32F32;
use sandwich_core::event::ShopEvent;
use sandwich_core::order::Order;
use sandwich_core::sandwich::Sandwich;
use sandwich_core::shop::{OrderOutcome, Shop, ShopError};
use sandwich_data::load_shop;

fn deli(seed: u64) -> Shop {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../sandwich-data/data/deli");
    load_shop(&dir, seed).unwrap()
}

fn dollars(v: f64) -> I32F32 {
    I32F32::from_num(v)
}

#[test]
fn hand_built_order_is_paid_for() {
    let mut shop = deli(1);
    let (recipe, sub) = shop
        .build_substitution("Turkey Club", &["Pickle"], &["Mayo"])
        .unwrap();
    let mut order = Order::new("Mabel");
    shop.kitchen()
        .add_sandwich(&mut order, Sandwich::with_substitution(recipe, sub));
    let price = order.total_cost();

    let funds = shop.funds();
    assert_eq!(shop.fulfil(&order), OrderOutcome::Completed);
    assert_eq!(shop.funds(), funds + price);
    assert_eq!(
        shop.drain_events(),
        vec![ShopEvent::OrderCompleted {
            customer: "Mabel".to_string(),
            revenue: price,
        }]
    );
}

#[test]
fn substitution_rules_follow_recipe_contents() {
    let shop = deli(1);
    // Deluxe Grilled Cheese lists Ham itself, so adding Ham is refused.
    assert!(matches!(
        shop.build_substitution("Deluxe Grilled Cheese", &["Ham"], &[]),
        Err(ShopError::AlreadyInRecipe { .. })
    ));
    // White Bread comes from the base recipe, which is not consulted.
    assert!(matches!(
        shop.build_substitution("Deluxe Grilled Cheese", &[], &["White Bread"]),
        Err(ShopError::NotInRecipe { .. })
    ));
}

#[test]
fn large_order_forces_a_restock() {
    let mut shop = deli(1);
    let reuben = shop.kitchen().find_recipe("Reuben").unwrap();
    let mut order = Order::new("Duncan");
    for _ in 0..8 {
        shop.kitchen().add_sandwich(&mut order, Sandwich::new(reuben));
    }

    // Six corned beef in stock, eight needed.
    assert_eq!(shop.fulfil(&order), OrderOutcome::CompletedAfterRestock);
    let events = shop.drain_events();
    assert!(matches!(events.first(), Some(ShopEvent::OrderRejected { .. })));
    assert!(events.iter().any(|e| matches!(e, ShopEvent::Restocked { .. })));
    assert!(matches!(events.last(), Some(ShopEvent::OrderCompleted { .. })));
    assert!(shop.funds() < dollars(1000.0));
}

#[test]
fn restocking_until_broke_records_bankruptcy() {
    let mut shop = deli(3);
    let reuben = shop.kitchen().find_recipe("Reuben").unwrap();
    let mut order = Order::new("Greg");
    for _ in 0..10 {
        shop.kitchen().add_sandwich(&mut order, Sandwich::new(reuben));
    }

    // Each full restock of ten Reubens costs $330.00.
    let mut restocks = 0;
    while shop.restock(&order) {
        restocks += 1;
    }
    assert_eq!(restocks, 3);
    assert!(shop.funds() < dollars(330.0));
    assert!(matches!(
        shop.pending_events().last(),
        Some(ShopEvent::Bankrupt { .. })
    ));

    // The partial purchases still leave enough stock to make the order.
    assert_eq!(shop.fulfil(&order), OrderOutcome::Completed);
}

#[test]
fn simulation_accounts_for_every_order() {
    let mut shop = deli(2024);
    let report = shop.simulate(200).unwrap();
    let settled = report.completed + report.completed_after_restock + report.still_short;
    if report.bankrupt {
        assert_eq!(settled + 1, report.orders);
    } else {
        assert_eq!(settled, 200);
    }
    assert_eq!(report.final_funds, shop.funds());
    assert_eq!(report.starting_funds, dollars(1000.0));
}
