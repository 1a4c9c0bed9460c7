//! Integration test: the grilled cheese deli.
//!
//! Bread ($1.00, x1), Cheese ($0.50, x0), Ham ($1.00, x3), Grilled Cheese
//! (Bread + Cheese, premium $0.50) and Deluxe (Grilled Cheese, +Ham, -Cheese,
//! premium $0.75). Walks the pricing, availability and order rules end to
//! end through the kitchen facade.

use sandwich_core::error::KitchenError;
use sandwich_core::id::FoodId;
use sandwich_core::order::Order;
use sandwich_core::recipe::ExclusionSet;
use sandwich_core::sandwich::Sandwich;
use sandwich_core::substitution::Substitution;
use sandwich_core::test_utils::{Deli, cost, deli};

fn qty(deli: &Deli, name: &str) -> u32 {
    let pantry = deli.kitchen.pantry();
    pantry.quantity(pantry.get_ingredient(name).unwrap())
}

#[test]
fn grilled_cheese_waits_for_cheese() {
    let mut d = deli();
    let none = ExclusionSet::new();

    assert_eq!(d.kitchen.total_cost(d.grilled_cheese), cost(2.0));
    assert!(!d.kitchen.can_make(d.grilled_cheese, &none));
    assert!(!d.kitchen.make(d.grilled_cheese, &none));
    assert_eq!(qty(&d, "Bread"), 1);

    d.kitchen.pantry_mut().order_more(d.cheese, 1);
    assert!(d.kitchen.make(d.grilled_cheese, &none));
    assert_eq!(qty(&d, "Bread"), 0);
    assert_eq!(qty(&d, "Cheese"), 0);
}

#[test]
fn deluxe_price_subtracts_removed_cheese() {
    let d = deli();
    let base_total = d.kitchen.total_cost(d.grilled_cheese);
    assert_eq!(
        d.kitchen.total_cost(d.deluxe),
        base_total + cost(1.0) + cost(0.75) - cost(0.5)
    );
    assert_eq!(d.kitchen.total_cost(d.deluxe), cost(3.25));
}

#[test]
fn deluxe_skips_the_missing_cheese() {
    let mut d = deli();
    let none = ExclusionSet::new();

    // Cheese is out, but Deluxe removes it from the base check.
    assert!(d.kitchen.can_make(d.deluxe, &none));
    assert!(d.kitchen.make(d.deluxe, &none));
    assert_eq!(qty(&d, "Bread"), 0);
    assert_eq!(qty(&d, "Ham"), 2);
    assert_eq!(qty(&d, "Cheese"), 0);
    assert_eq!(d.kitchen.ingredients(d.deluxe), vec![d.bread, d.ham]);
}

/// Removed ingredients are subtracted even when the base never had them.
#[test]
fn removal_of_absent_ingredient_still_discounts() {
    let mut d = deli();
    let odd = d
        .kitchen
        .register_complex_recipe("No Ham Grilled", vec![], d.grilled_cheese, vec![d.ham], cost(0.0))
        .unwrap();
    assert_eq!(d.kitchen.raw_cost(odd), cost(2.0) - cost(1.0));
    assert_eq!(d.kitchen.ingredients(odd), vec![d.bread, d.cheese]);
}

/// A complex recipe only answers for its own additions.
#[test]
fn contains_ingredient_ignores_the_base() {
    let d = deli();
    assert!(d.kitchen.contains_ingredient(d.deluxe, "Ham"));
    assert!(!d.kitchen.contains_ingredient(d.deluxe, "Bread"));
    assert!(!d.kitchen.contains_ingredient(d.deluxe, "Cheese"));
    assert!(d.kitchen.contains_ingredient(d.grilled_cheese, "Cheese"));
}

/// The recipe's own removals reach the base check but not its additions.
#[test]
fn own_removals_do_not_cover_additions() {
    let mut d = deli();
    let ham_sandwich = d
        .kitchen
        .register_simple_recipe("Ham Sandwich", vec![d.bread, d.ham], cost(0.5))
        .unwrap();
    let swap = d
        .kitchen
        .register_complex_recipe("Ham Swap", vec![d.ham], ham_sandwich, vec![d.ham], cost(0.0))
        .unwrap();
    let none = ExclusionSet::new();

    d.kitchen.pantry_mut().order_more(d.ham, -3);
    assert!(!d.kitchen.can_make(swap, &none));

    d.kitchen.pantry_mut().order_more(d.ham, 1);
    assert!(d.kitchen.make(swap, &none));
    assert_eq!(qty(&d, "Ham"), 0);
    assert_eq!(qty(&d, "Bread"), 0);

    // A caller exclusion does reach the additions.
    let mut skip_ham = ExclusionSet::new();
    skip_ham.insert(d.ham);
    d.kitchen.pantry_mut().order_more(d.bread, 1);
    assert!(d.kitchen.can_make(swap, &skip_ham));
}

#[test]
fn order_with_unmakeable_middle_sandwich_changes_nothing() {
    let mut d = deli();
    d.kitchen.pantry_mut().order_more(d.bread, 2);
    let mut order = Order::new("Rick");
    d.kitchen.add_sandwich(&mut order, Sandwich::new(d.deluxe));
    d.kitchen.add_sandwich(&mut order, Sandwich::new(d.grilled_cheese));
    d.kitchen.add_sandwich(&mut order, Sandwich::new(d.deluxe));

    let before: Vec<u32> = ["Bread", "Cheese", "Ham"].iter().map(|n| qty(&d, n)).collect();
    assert!(!d.kitchen.make_order(&order));
    let after: Vec<u32> = ["Bread", "Cheese", "Ham"].iter().map(|n| qty(&d, n)).collect();
    assert_eq!(before, after);

    // Dropping the grilled cheese leaves two makeable sandwiches.
    order.remove_sandwich(1);
    assert!(d.kitchen.make_order(&order));
    assert_eq!(qty(&d, "Bread"), 1);
    assert_eq!(qty(&d, "Ham"), 1);
}

/// The cached order total only moves on `add_sandwich`.
#[test]
fn removing_a_sandwich_keeps_the_cached_total() {
    let d = deli();
    let mut order = Order::new("Erin");
    d.kitchen.add_sandwich(&mut order, Sandwich::new(d.grilled_cheese));
    d.kitchen.add_sandwich(&mut order, Sandwich::new(d.deluxe));
    assert_eq!(order.total_cost(), cost(5.25));

    order.remove_sandwich(1);
    assert_eq!(order.total_cost(), cost(5.25));

    d.kitchen.add_sandwich(&mut order, Sandwich::new(d.grilled_cheese));
    assert_eq!(order.total_cost(), cost(4.0));
}

#[test]
fn substitution_prices_and_describes() {
    let d = deli();
    let sub = Substitution::with(vec![d.ham], vec![d.cheese]);
    let sandwich = Sandwich::with_substitution(d.grilled_cheese, sub);
    assert_eq!(d.kitchen.sandwich_cost(&sandwich), cost(2.5));
    assert!(d.kitchen.can_make_sandwich(&sandwich));
    assert_eq!(
        sandwich.describe(d.kitchen.cookbook(), d.kitchen.pantry()),
        "A Grilled Cheese sandwich with a substitution of added Ham and no Cheese."
    );
}

/// Back-references are a snapshot taken when each composite is registered:
/// registering a node walks everything beneath it once, and nothing is
/// recomputed afterwards.
#[test]
fn back_references_are_registration_snapshots() {
    let mut d = deli();
    assert_eq!(
        d.kitchen.used_by(d.cheese),
        &[FoodId::from(d.grilled_cheese), FoodId::from(d.deluxe)]
    );
    assert_eq!(d.kitchen.used_by(d.grilled_cheese), &[FoodId::from(d.deluxe)]);
    assert_eq!(d.kitchen.printable_references(d.deluxe), "None");

    let triple = d
        .kitchen
        .register_complex_recipe("Triple", vec![d.ham], d.deluxe, vec![], cost(0.25))
        .unwrap();
    assert_eq!(
        d.kitchen.used_by(d.bread),
        &[
            FoodId::from(d.grilled_cheese),
            FoodId::from(d.deluxe),
            FoodId::from(triple),
        ]
    );
    assert_eq!(
        d.kitchen.printable_references(d.ham),
        "{Deluxe, Triple}"
    );
}

#[test]
fn used_ingredients_cannot_be_removed() {
    let mut d = deli();
    match d.kitchen.remove_ingredient("Cheese") {
        Err(KitchenError::IngredientInUse { used_by, .. }) => {
            assert_eq!(used_by, vec!["Grilled Cheese".to_string(), "Deluxe".to_string()]);
        }
        other => panic!("expected IngredientInUse, got {other:?}"),
    }
}

#[test]
fn ingredients_named_only_as_removals_cannot_be_removed() {
    let mut d = deli();
    let pickle = d
        .kitchen
        .add_simple_ingredient("Pickle", 2, cost(0.25))
        .unwrap();
    let toast = d
        .kitchen
        .register_simple_recipe("Toast", vec![d.bread], cost(0.25))
        .unwrap();
    let no_pickle = d
        .kitchen
        .register_complex_recipe("No Pickle Toast", vec![], toast, vec![pickle], cost(0.0))
        .unwrap();
    assert_eq!(d.kitchen.total_cost(no_pickle), cost(1.0));
    assert!(d.kitchen.used_by(pickle).is_empty());

    match d.kitchen.remove_ingredient("Pickle") {
        Err(KitchenError::IngredientInUse { used_by, .. }) => {
            assert_eq!(used_by, vec!["No Pickle Toast".to_string()]);
        }
        other => panic!("expected IngredientInUse, got {other:?}"),
    }
    assert!(d.kitchen.pantry().contains(pickle));
    assert_eq!(d.kitchen.total_cost(no_pickle), cost(1.0));
}

#[test]
fn stale_handles_read_as_empty() {
    let mut d = deli();
    let olive = d
        .kitchen
        .add_simple_ingredient("Olive", 4, cost(0.3))
        .unwrap();
    let sandwich = Sandwich::with_substitution(d.deluxe, Substitution::with(vec![olive], vec![]));
    assert!(d.kitchen.can_make_sandwich(&sandwich));

    d.kitchen.remove_ingredient("Olive").unwrap();
    let pantry = d.kitchen.pantry();
    assert_eq!(pantry.cost(olive), cost(0.0));
    assert_eq!(pantry.quantity(olive), 0);
    assert!(!pantry.can_use(olive));
    assert!(!d.kitchen.can_make_sandwich(&sandwich));
    assert_eq!(d.kitchen.sandwich_cost(&sandwich), cost(3.25));

    d.kitchen.pantry_mut().order_more(olive, 5);
    assert!(!d.kitchen.pantry_mut().use_ingredient(olive));
}
