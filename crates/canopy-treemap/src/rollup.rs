//! Bottom-up rollup of base values over a scope.

use std::{cmp::Reverse, collections::HashMap};

use canopy_table::{IdMaps, depth};
use serde::Serialize;
use tracing::debug;

use crate::scope::Scope;

/// How the rollup totals were measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Sums of base values.
    Value,
    /// Every scoped leaf counts as one; used when all values roll up to zero.
    Count,
}

/// Rollup totals for every ID in a scope.
#[derive(Debug, Clone)]
pub struct Rollup<'a> {
    /// Total per scoped ID.
    pub totals: HashMap<&'a str, f64>,
    /// Sum over the scope's top-level IDs.
    pub root_value: f64,
    /// Measure the totals are expressed in.
    pub measure: Measure,
}

impl Rollup<'_> {
    /// Returns the total of an ID, or `0.0` if it is out of scope.
    pub fn total(&self, id: &str) -> f64 {
        self.totals.get(id).copied().unwrap_or(0.0)
    }
}

/// Returns the scope's IDs ordered deepest first.
fn deepest_first<'a>(scope: &Scope<'a>) -> Vec<&'a str> {
    let mut order = scope.ids.clone();
    order.sort_by_key(|id| Reverse(depth(id)));
    order
}

/// Rolls base values up the scoped hierarchy.
///
/// A node with scoped children takes the sum of their totals, or its own base
/// value when that sum is exactly zero. A leaf takes its base value. When the
/// whole scope sums to zero, leaves are recounted as one each and parents sum
/// their children.
pub fn rollup<'a>(maps: &'a IdMaps, scope: &Scope<'a>, base: &HashMap<String, f64>) -> Rollup<'a> {
    let order = deepest_first(scope);
    let base_of = |id: &str| base.get(id).copied().unwrap_or(0.0);

    let mut totals: HashMap<&'a str, f64> = HashMap::with_capacity(order.len());
    for &id in &order {
        let mut kids = scope.children(maps, id).peekable();
        let total = if kids.peek().is_some() {
            let sum: f64 = kids.map(|k| totals.get(k).copied().unwrap_or(0.0)).sum();
            if sum == 0.0 { base_of(id) } else { sum }
        } else {
            base_of(id)
        };
        totals.insert(id, total);
    }

    let top = top_ids(maps, scope);
    let root_value = sum_over(&totals, &top);
    if root_value != 0.0 || scope.ids.is_empty() {
        return Rollup {
            totals,
            root_value,
            measure: Measure::Value,
        };
    }

    debug!(ids = scope.ids.len(), "all values roll up to zero, counting leaves");
    for &id in &order {
        let mut kids = scope.children(maps, id).peekable();
        let total = if kids.peek().is_some() {
            kids.map(|k| totals.get(k).copied().unwrap_or(0.0)).sum::<f64>()
        } else {
            1.0
        };
        totals.insert(id, total);
    }
    let root_value = sum_over(&totals, &top);
    Rollup {
        totals,
        root_value,
        measure: Measure::Count,
    }
}

/// Sums the totals of the given IDs.
fn sum_over(totals: &HashMap<&str, f64>, ids: &[&str]) -> f64 {
    ids.iter().map(|id| totals.get(id).copied().unwrap_or(0.0)).sum()
}

/// Returns the scoped IDs whose parent is outside the scope.
pub fn top_ids<'a>(maps: &IdMaps, scope: &Scope<'a>) -> Vec<&'a str> {
    scope
        .ids
        .iter()
        .copied()
        .filter(|id| !maps.parent(id).is_some_and(|p| scope.contains(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn maps() -> IdMaps {
        IdMaps::from_pairs([
            ("1", "1 A"),
            ("1.1", "1.1 A1"),
            ("1.2", "1.2 A2"),
            ("2", "2 B"),
            ("2.1", "2.1 B1"),
        ])
    }

    fn base(values: &[(&str, f64)]) -> HashMap<String, f64> {
        values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn whole(maps: &IdMaps) -> Scope<'_> {
        Scope::new(maps, &[] as &[&str])
    }

    #[test]
    fn test_parent_sums_children() {
        let maps = maps();
        let scope = whole(&maps);
        let r = rollup(&maps, &scope, &base(&[("1", 7.0), ("1.1", 2.0), ("1.2", 3.0), ("2.1", 4.0)]));
        assert_eq!(r.measure, Measure::Value);
        assert_eq!(r.total("1"), 5.0);
        assert_eq!(r.total("2"), 4.0);
        assert_eq!(r.root_value, 9.0);
    }

    #[test]
    fn test_zero_children_fall_back_to_own_value() {
        let maps = maps();
        let scope = whole(&maps);
        let r = rollup(&maps, &scope, &base(&[("1", 7.0), ("2.1", 1.0)]));
        assert_eq!(r.total("1"), 7.0);
        assert_eq!(r.total("1.1"), 0.0);
        assert_eq!(r.root_value, 8.0);
    }

    #[test]
    fn test_count_fallback() {
        let maps = maps();
        let scope = whole(&maps);
        let r = rollup(&maps, &scope, &HashMap::new());
        assert_eq!(r.measure, Measure::Count);
        assert_eq!(r.total("1"), 2.0);
        assert_eq!(r.total("2.1"), 1.0);
        // Three scoped leaves.
        assert_eq!(r.root_value, 3.0);
    }

    #[test]
    fn test_anchor_scope_top_ids() {
        let maps = maps();
        let scope = Scope::new(&maps, &["1 A"]);
        assert_eq!(top_ids(&maps, &scope), vec!["1"]);
        let r = rollup(&maps, &scope, &base(&[("1.1", 2.0), ("2.1", 9.0)]));
        assert_eq!(r.root_value, 2.0);
        assert_eq!(r.total("2.1"), 0.0);
    }

    fn arb_base() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(prop_oneof![Just(0.0), 1.0..100.0f64], 5)
    }

    proptest! {
        #[test]
        fn prop_rollup_conservation(values in arb_base()) {
            let maps = maps();
            let scope = whole(&maps);
            let ids = ["1", "1.1", "1.2", "2", "2.1"];
            let base: HashMap<String, f64> =
                ids.iter().zip(&values).map(|(k, v)| (k.to_string(), *v)).collect();
            let r = rollup(&maps, &scope, &base);
            for parent in ["1", "2"] {
                let kids: Vec<&str> = scope.children(&maps, parent).collect();
                let sum: f64 = kids.iter().map(|k| r.total(k)).sum();
                if sum != 0.0 {
                    prop_assert_eq!(r.total(parent), sum);
                }
            }
            prop_assert!(r.root_value > 0.0);
        }
    }
}
