//! Category-scoped unit selection

use crate::{Unit, Category};
use crate::units::UNITS;

/// The first two units of a category, as (from, to)
///
/// Every category in the static catalog has at least two units, so a
/// missing pair is a defect in the catalog itself.
pub fn default_pair(category: Category) -> (Unit, Unit) {
    let mut units = UNITS.iter_category(category);
    match (units.next(), units.next()) {
        (Some(from), Some(to)) => (*from, *to),
        _ => unreachable!("catalog must hold at least two {} units", category),
    }
}

/// Keep `previous` if it belongs to `category`, otherwise fall back to the
/// category's first unit
pub fn reconcile(previous: &Unit, category: Category) -> Unit {
    if UNITS.is_member(previous, category) {
        return *previous;
    }
    default_pair(category).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_distance() {
        let (from, to) = default_pair(Category::Distance);
        assert_eq!(from.symbol, "m");
        assert_eq!(to.symbol, "km");
    }

    #[test]
    fn test_default_pair_mass() {
        let (from, to) = default_pair(Category::Mass);
        assert_eq!(from.symbol, "kg");
        assert_eq!(to.symbol, "g");
    }

    #[test]
    fn test_default_pair_is_distinct() {
        for category in Category::ALL {
            let (from, to) = default_pair(category);
            assert_ne!(from, to);
            assert_eq!(from.category, category);
            assert_eq!(to.category, category);
        }
    }

    #[test]
    fn test_reconcile_keeps_member() {
        let mile = *UNITS.get("mi").unwrap();
        assert_eq!(reconcile(&mile, Category::Distance), mile);
    }

    #[test]
    fn test_reconcile_replaces_stale_unit() {
        let mile = *UNITS.get("mi").unwrap();
        let unit = reconcile(&mile, Category::Mass);
        assert_eq!(unit.symbol, "kg");
    }
}
