use crate::fixed::Cost;
use crate::id::IngredientId;

/// A stock item in the pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub kind: IngredientKind,
}

/// The two ingredient variants. The set is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientKind {
    /// A leaf with its own unit cost and stock count.
    Simple { unit_cost: Cost, quantity: u32 },
    /// Derived from other pantry ingredients. Has no stock of its own: its
    /// quantity is the minimum over `bases`, and using it uses one of each.
    Complex {
        premium: Cost,
        bases: Vec<IngredientId>,
    },
}

impl Ingredient {
    pub fn simple(name: &str, quantity: u32, unit_cost: Cost) -> Self {
        Self {
            name: name.to_string(),
            kind: IngredientKind::Simple {
                unit_cost,
                quantity,
            },
        }
    }

    pub fn complex(name: &str, premium: Cost, bases: Vec<IngredientId>) -> Self {
        Self {
            name: name.to_string(),
            kind: IngredientKind::Complex { premium, bases },
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.kind, IngredientKind::Complex { .. })
    }

    /// The ingredients this one is made from. Empty for simple ingredients.
    pub fn bases(&self) -> &[IngredientId] {
        match &self.kind {
            IngredientKind::Simple { .. } => &[],
            IngredientKind::Complex { bases, .. } => bases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::f64_to_cost;

    #[test]
    fn simple_has_no_bases() {
        let bread = Ingredient::simple("Bread", 3, f64_to_cost(1.0));
        assert!(!bread.is_complex());
        assert!(bread.bases().is_empty());
    }

    #[test]
    fn complex_exposes_bases() {
        let mut ids: slotmap::SlotMap<IngredientId, ()> = slotmap::SlotMap::with_key();
        let a = ids.insert(());
        let b = ids.insert(());
        let mix = Ingredient::complex("Mix", f64_to_cost(0.25), vec![a, b]);
        assert!(mix.is_complex());
        assert_eq!(mix.bases(), &[a, b]);
    }
}
