//! Containment, ordering and equality predicates.
//!
//! Two undefined-key policies exist for containment: [`fit_in`] reads a
//! type missing from the larger side as 0, [`fit_in_max_undef`] reads it as
//! unbounded (an undefined quota means "no limit").

use std::ptr;

use crate::resource::{Resource, ZERO};

/// Whether `smaller` fits in `larger`, reading undefined types as 0.
///
/// Negative values on the larger side count as 0. `None` for `smaller`
/// always fits; `None` for `larger` is all zero.
pub fn fit_in(larger: Option<&Resource>, smaller: Option<&Resource>) -> bool {
    fits(larger, smaller, false)
}

/// Whether `smaller` fits in `larger`, reading undefined types as unbounded.
pub fn fit_in_max_undef(larger: Option<&Resource>, smaller: Option<&Resource>) -> bool {
    fits(larger, smaller, true)
}

fn fits(larger: Option<&Resource>, smaller: Option<&Resource>, skip_undef: bool) -> bool {
    let larger = larger.unwrap_or(&ZERO);
    let Some(smaller) = smaller else {
        return true;
    };
    smaller.iter().all(|(k, v)| match larger.get(k) {
        None if skip_undef => true,
        larger_value => v <= larger_value.unwrap_or(0).max(0),
    })
}

/// `larger >= smaller` for every type of either side, with at least one
/// type differing. Equal vectors are not strictly greater.
pub fn strictly_greater_than(larger: Option<&Resource>, smaller: Option<&Resource>) -> bool {
    let larger = larger.unwrap_or(&ZERO);
    let smaller = smaller.unwrap_or(&ZERO);
    greater_or_equal_everywhere(larger, smaller) && !equals(Some(larger), Some(smaller))
}

/// `larger >= smaller` for every type of either side.
pub fn strictly_greater_than_or_equals(
    larger: Option<&Resource>,
    smaller: Option<&Resource>,
) -> bool {
    greater_or_equal_everywhere(larger.unwrap_or(&ZERO), smaller.unwrap_or(&ZERO))
}

fn greater_or_equal_everywhere(larger: &Resource, smaller: &Resource) -> bool {
    larger.iter().all(|(k, v)| smaller.get_or_zero(k) <= v)
        && smaller.iter().all(|(k, v)| larger.get_or_zero(k) >= v)
}

/// Strict comparison restricted to the types defined in `larger`.
///
/// Types only defined in `smaller` are ignored. Special cases:
/// - `smaller` empty: every value in `larger` must be above 0.
/// - no shared types: true only when neither side is empty.
pub fn strictly_greater_than_only_existing(
    larger: Option<&Resource>,
    smaller: Option<&Resource>,
) -> bool {
    let larger = larger.unwrap_or(&ZERO);
    let smaller = smaller.unwrap_or(&ZERO);

    if smaller.is_empty() && !larger.is_empty() {
        return larger.values().all(|v| v > 0);
    }

    let mut shared = false;
    let mut not_equal = false;
    for (k, v) in larger.iter() {
        if let Some(s) = smaller.get(k) {
            shared = true;
            if s > v {
                return false;
            }
            if s != v {
                not_equal = true;
            }
        }
    }

    if shared {
        not_equal
    } else {
        !larger.is_empty() && !smaller.is_empty()
    }
}

/// At least one value above 0 and none below. `None` is not greater.
pub fn strictly_greater_than_zero(larger: Option<&Resource>) -> bool {
    let Some(larger) = larger else {
        return false;
    };
    let mut greater = false;
    for v in larger.values() {
        if v < 0 {
            return false;
        }
        if v > 0 {
            greater = true;
        }
    }
    greater
}

pub fn has_negative_value(r: Option<&Resource>) -> bool {
    r.is_some_and(|r| r.values().any(|v| v < 0))
}

/// `None` or no types defined.
pub fn is_empty(r: Option<&Resource>) -> bool {
    r.is_none_or(Resource::is_empty)
}

/// `None` or every defined value is 0. An explicit zero entry is zero but
/// not empty.
pub fn is_zero(r: Option<&Resource>) -> bool {
    r.is_none_or(|r| r.values().all(|v| v == 0))
}

/// Whether any type of `left` is also defined in `right`, regardless of
/// the values.
pub fn match_any(left: Option<&Resource>, right: Option<&Resource>) -> bool {
    let (Some(left), Some(right)) = (left, right) else {
        return false;
    };
    if ptr::eq(left, right) {
        return true;
    }
    left.keys().any(|k| right.contains(k))
}

/// Value equality reading absent types as 0 on both sides.
///
/// `{a: 1}` equals `{a: 1, b: 0}`. Exactly one `None` side is unequal.
pub fn equals(left: Option<&Resource>, right: Option<&Resource>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) if ptr::eq(l, r) => true,
        (Some(l), Some(r)) => {
            l.iter().all(|(k, v)| r.get_or_zero(k) == v)
                && r.iter().all(|(k, v)| l.get_or_zero(k) == v)
        }
        _ => false,
    }
}

/// Like [`equals`], but two zero vectors are always equal, so `None`
/// equals an explicit-zero vector.
pub fn equals_or_empty(left: Option<&Resource>, right: Option<&Resource>) -> bool {
    (is_zero(left) && is_zero(right)) || equals(left, right)
}

/// Strict equality: same type set and same values.
pub fn deep_equals(left: Option<&Resource>, right: Option<&Resource>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => {
            if ptr::eq(l, r) {
                return true;
            }
            if l.len() != r.len() {
                return false;
            }
            l.iter().all(|(k, v)| r.get(k) == Some(v))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res<const N: usize>(pairs: [(&str, i64); N]) -> Resource {
        Resource::from(pairs)
    }

    #[test]
    fn fit_in_none_smaller_always_fits() {
        assert!(fit_in(None, None));
        assert!(fit_in(Some(&res([("memory", -1)])), None));
        assert!(fit_in_max_undef(None, None));
    }

    #[test]
    fn fit_in_none_larger_is_zero() {
        assert!(fit_in(None, Some(&res([("memory", 0)]))));
        assert!(!fit_in(None, Some(&res([("memory", 1)]))));
        assert!(fit_in(None, Some(&res([("memory", -1)]))));
    }

    #[test]
    fn fit_in_compares_values() {
        let larger = res([("memory", 100), ("vcore", 10)]);
        assert!(fit_in(Some(&larger), Some(&res([("memory", 100)]))));
        assert!(fit_in(Some(&larger), Some(&res([("memory", 50), ("vcore", 10)]))));
        assert!(!fit_in(Some(&larger), Some(&res([("memory", 101)]))));
    }

    #[test]
    fn fit_in_negative_larger_counts_as_zero() {
        let larger = res([("memory", -10)]);
        assert!(fit_in(Some(&larger), Some(&res([("memory", 0)]))));
        assert!(fit_in(Some(&larger), Some(&res([("memory", -5)]))));
        assert!(!fit_in(Some(&larger), Some(&res([("memory", 1)]))));
    }

    #[test]
    fn undefined_type_policies_differ() {
        let larger = res([("vcore", 5)]);
        let smaller = res([("memory", 10)]);
        assert!(fit_in_max_undef(Some(&larger), Some(&smaller)));
        assert!(!fit_in(Some(&larger), Some(&smaller)));
        // defined types are still checked
        assert!(!fit_in_max_undef(Some(&larger), Some(&res([("vcore", 6)]))));
    }

    #[test]
    fn strictly_greater_than_requires_a_difference() {
        let a = res([("memory", 10), ("vcore", 5)]);
        let b = res([("memory", 5), ("vcore", 5)]);
        assert!(strictly_greater_than(Some(&a), Some(&b)));
        assert!(!strictly_greater_than(Some(&b), Some(&a)));
        assert!(!strictly_greater_than(Some(&a), Some(&a.clone())));
        assert!(!strictly_greater_than(None, None));
        assert!(strictly_greater_than(Some(&a), None));
        assert!(!strictly_greater_than(None, Some(&a)));
    }

    #[test]
    fn strictly_greater_than_checks_both_key_sets() {
        let a = res([("memory", 10)]);
        let b = res([("memory", 5), ("vcore", 1)]);
        assert!(!strictly_greater_than(Some(&a), Some(&b)));
        let c = res([("memory", 5), ("vcore", -1)]);
        assert!(strictly_greater_than(Some(&a), Some(&c)));
    }

    #[test]
    fn strictly_greater_than_or_equals_accepts_equal() {
        let a = res([("memory", 10)]);
        assert!(strictly_greater_than_or_equals(Some(&a), Some(&a.clone())));
        assert!(strictly_greater_than_or_equals(None, None));
        assert!(strictly_greater_than_or_equals(Some(&a), None));
        assert!(!strictly_greater_than_or_equals(None, Some(&a)));
        // an explicit zero equals an absent type
        assert!(strictly_greater_than_or_equals(
            Some(&res([("memory", 0)])),
            Some(&Resource::new())
        ));
    }

    #[test]
    fn only_existing_with_empty_smaller() {
        assert!(strictly_greater_than_only_existing(
            Some(&res([("memory", 1), ("vcore", 2)])),
            None
        ));
        assert!(!strictly_greater_than_only_existing(
            Some(&res([("memory", 1), ("vcore", 0)])),
            Some(&Resource::new())
        ));
        assert!(!strictly_greater_than_only_existing(None, None));
    }

    #[test]
    fn only_existing_with_shared_types() {
        let larger = res([("memory", 10), ("vcore", 5)]);
        assert!(strictly_greater_than_only_existing(
            Some(&larger),
            Some(&res([("memory", 5), ("gpu", 100)]))
        ));
        assert!(!strictly_greater_than_only_existing(
            Some(&larger),
            Some(&res([("memory", 10), ("gpu", 100)]))
        ));
        assert!(!strictly_greater_than_only_existing(
            Some(&larger),
            Some(&res([("memory", 11)]))
        ));
    }

    #[test]
    fn only_existing_disjoint() {
        assert!(strictly_greater_than_only_existing(
            Some(&res([("memory", 10)])),
            Some(&res([("vcore", 5)]))
        ));
        assert!(!strictly_greater_than_only_existing(
            None,
            Some(&res([("vcore", 5)]))
        ));
    }

    #[test]
    fn greater_than_zero() {
        assert!(!strictly_greater_than_zero(None));
        assert!(!strictly_greater_than_zero(Some(&Resource::new())));
        assert!(!strictly_greater_than_zero(Some(&res([("memory", 0)]))));
        assert!(strictly_greater_than_zero(Some(&res([("memory", 0), ("vcore", 1)]))));
        assert!(!strictly_greater_than_zero(Some(&res([("memory", -1), ("vcore", 1)]))));
    }

    #[test]
    fn negative_empty_zero() {
        assert!(!has_negative_value(None));
        assert!(has_negative_value(Some(&res([("memory", 1), ("vcore", -1)]))));
        assert!(!has_negative_value(Some(&res([("memory", 0)]))));

        assert!(is_empty(None));
        assert!(is_empty(Some(&Resource::new())));
        assert!(!is_empty(Some(&res([("memory", 0)]))));

        assert!(is_zero(None));
        assert!(is_zero(Some(&ZERO)));
        assert!(is_zero(Some(&res([("memory", 0)]))));
        assert!(!is_zero(Some(&res([("memory", 0), ("vcore", 1)]))));
    }

    #[test]
    fn match_any_ignores_values() {
        let a = res([("memory", 0)]);
        let b = res([("memory", 5), ("vcore", 1)]);
        assert!(match_any(Some(&a), Some(&b)));
        assert!(!match_any(Some(&a), Some(&res([("vcore", 1)]))));
        assert!(!match_any(None, Some(&b)));
        assert!(!match_any(Some(&a), None));
        assert!(match_any(Some(&ZERO), Some(&ZERO)));
        assert!(!match_any(Some(&ZERO), Some(&Resource::new())));
    }

    #[test]
    fn equals_reads_absent_as_zero() {
        let a = res([("a", 1)]);
        let b = res([("a", 1), ("b", 0)]);
        assert!(equals(Some(&a), Some(&b)));
        assert!(equals(Some(&b), Some(&a)));
        assert!(!equals(Some(&a), Some(&res([("a", 2)]))));
        assert!(!equals(Some(&a), Some(&res([("a", 1), ("b", 1)]))));
        assert!(equals(None, None));
        assert!(!equals(Some(&a), None));
        assert!(!equals(None, Some(&Resource::new())));
    }

    #[test]
    fn equals_or_empty_treats_zero_as_none() {
        let zero = res([("memory", 0)]);
        assert!(equals_or_empty(None, Some(&zero)));
        assert!(equals_or_empty(Some(&zero), None));
        assert!(equals_or_empty(None, None));
        assert!(!equals_or_empty(None, Some(&res([("memory", 1)]))));
        assert!(equals_or_empty(Some(&res([("memory", 1)])), Some(&res([("memory", 1)]))));
    }

    #[test]
    fn deep_equals_is_strict() {
        let a = res([("a", 1)]);
        let b = res([("a", 1), ("b", 0)]);
        assert!(!deep_equals(Some(&a), Some(&b)));
        assert!(deep_equals(Some(&a), Some(&a.clone())));
        assert!(!deep_equals(Some(&res([("a", 1)])), Some(&res([("b", 1)]))));
        assert!(!deep_equals(Some(&a), Some(&res([("a", 2)]))));
        assert!(deep_equals(None, None));
        assert!(!deep_equals(Some(&a), None));
    }
}
