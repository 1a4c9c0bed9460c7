use fixed::types::I32F32;

/// Q32.32 fixed-point: the single cost unit used for prices, premiums and funds.
pub type Cost = I32F32;

/// Convert an f64 to a Cost. Use only when reading data files or config.
#[inline]
pub fn f64_to_cost(v: f64) -> Cost {
    Cost::from_num(v)
}

/// Convert an f64 to a Cost, or `None` if it is not finite or does not fit
/// in Q32.32. Use for values read from data files.
#[inline]
pub fn checked_f64_to_cost(v: f64) -> Option<Cost> {
    if v.is_finite() { Cost::checked_from_num(v) } else { None }
}

/// Convert a Cost to f64. Use only for display.
#[inline]
pub fn cost_to_f64(v: Cost) -> f64 {
    v.to_num::<f64>()
}

/// Sum a sequence of costs, starting from `init`.
#[inline]
pub fn sum_costs(init: Cost, costs: impl IntoIterator<Item = Cost>) -> Cost {
    costs.into_iter().fold(init, |acc, c| acc + c)
}

/// `factor * cost`, saturating instead of overflowing.
#[inline]
pub fn scale_cost(cost: Cost, factor: u32) -> Cost {
    cost.saturating_mul(Cost::from_num(factor))
}

/// Render a cost as dollars with two decimals, e.g. `$2.50`.
pub fn format_dollars(v: Cost) -> String {
    format!("${:.2}", cost_to_f64(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_basic_arithmetic() {
        let a = f64_to_cost(1.5);
        let b = f64_to_cost(0.5);
        assert_eq!(cost_to_f64(a + b), 2.0);
        assert_eq!(cost_to_f64(a - b), 1.0);
    }

    #[test]
    fn sum_costs_starts_from_init() {
        let total = sum_costs(f64_to_cost(0.5), [f64_to_cost(1.0), f64_to_cost(0.25)]);
        assert_eq!(total, f64_to_cost(1.75));
        assert_eq!(sum_costs(Cost::ZERO, []), Cost::ZERO);
    }

    #[test]
    fn scale_cost_multiplies() {
        assert_eq!(scale_cost(f64_to_cost(0.75), 10), f64_to_cost(7.5));
    }

    #[test]
    fn scale_cost_saturates() {
        assert_eq!(scale_cost(Cost::MAX, 10), Cost::MAX);
    }

    #[test]
    fn checked_conversion_rejects_out_of_range() {
        assert_eq!(checked_f64_to_cost(2.5), Some(f64_to_cost(2.5)));
        assert_eq!(checked_f64_to_cost(-1.25), Some(f64_to_cost(-1.25)));
        assert_eq!(checked_f64_to_cost(1e12), None);
        assert_eq!(checked_f64_to_cost(-1e12), None);
        assert_eq!(checked_f64_to_cost(f64::NAN), None);
        assert_eq!(checked_f64_to_cost(f64::INFINITY), None);
    }

    #[test]
    fn format_dollars_two_decimals() {
        assert_eq!(format_dollars(f64_to_cost(2.0)), "$2.00");
        assert_eq!(format_dollars(f64_to_cost(0.5)), "$0.50");
    }

    #[test]
    fn cost_determinism() {
        let a = f64_to_cost(1.0 / 3.0);
        let b = f64_to_cost(1.0 / 3.0);
        assert_eq!(a, b);
        assert_eq!(a * f64_to_cost(3.0), b * f64_to_cost(3.0));
    }
}
