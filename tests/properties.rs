//! Property tests for progression invariants.

use proptest::prelude::*;
use sweep_steps::Progression;

/// Valid discrete progressions, either direction, possibly empty.
/// Empty ones are always generated ascending.
fn progression() -> impl Strategy<Value = Progression> {
    (
        -1.0e3..1.0e3f64,
        0.0..1.0e3f64,
        prop_oneof![Just(0.0), 0.01..10.0f64],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(from, span, step, descending, template)| {
            if descending && step != 0.0 {
                Progression::new(from, from - span, -step, template).unwrap()
            } else {
                Progression::new(from, from + span, step, template).unwrap()
            }
        })
}

proptest! {
    #[test]
    fn first_value_is_member_unless_empty(p in progression()) {
        prop_assert_eq!(p.has_value(p.from_value()), !p.is_empty());
    }

    #[test]
    fn empty_progression_has_no_members(from in -1.0e3..1.0e3f64, span in 0.0..1.0e3f64, x in -2.0e3..2.0e3f64) {
        let p = Progression::new(from, from + span, 0.0, false).unwrap();
        prop_assert!(!p.has_value(x));
        prop_assert!(!p.has_value(from));
    }

    #[test]
    fn format_then_parse_is_identity(p in progression()) {
        let text = p.to_string();
        let back = Progression::parse(&text).unwrap();
        prop_assert_eq!(back.from_value(), p.from_value());
        prop_assert_eq!(back.to_value(), p.to_value());
        prop_assert_eq!(back.increment(), p.increment());
        prop_assert_eq!(back.from_template(), p.from_template());
    }

    #[test]
    fn clone_agrees_on_membership(p in progression(), xs in prop::collection::vec(-2.0e3..2.0e3f64, 1..32)) {
        let copy = p.clone();
        for x in xs {
            prop_assert_eq!(copy.has_value(x), p.has_value(x));
        }
        for x in p.values().take(32) {
            prop_assert_eq!(copy.has_value(x), p.has_value(x));
        }
    }

    #[test]
    fn empty_is_subset_of_anything(p in progression()) {
        prop_assert!(Progression::empty().is_subset_of(&p));
        prop_assert!(Progression::empty().is_subset_of(&Progression::default()));
    }

    #[test]
    fn values_stay_in_bounds_and_terminate(p in progression()) {
        let limit = if p.is_empty() {
            0
        } else {
            let step = p.increment().to_f64().abs();
            ((p.to_value() - p.from_value()).abs() / step) as usize + 2
        };

        let values: Vec<f64> = p.values().take(limit + 1).collect();
        prop_assert!(values.len() <= limit);
        let (low, high) = if p.is_increasing() {
            (p.from_value(), p.to_value())
        } else {
            (p.to_value(), p.from_value())
        };
        for window in values.windows(2) {
            prop_assert!(window[0] != window[1]);
            prop_assert_eq!(window[1] > window[0], p.is_increasing());
        }
        for v in values {
            prop_assert!(low <= v && v <= high);
        }
    }
}

#[test]
fn tenth_steps_end_near_bound() {
    let p = Progression::new(0.0, 1.5, 0.1, false).unwrap();
    let values: Vec<f64> = p.values().collect();

    assert!(values.len() >= 15 && values.len() <= 16);
    assert!(values.windows(2).all(|w| w[1] > w[0]));
    assert!(*values.last().unwrap() <= 1.5);
    assert_eq!(Progression::new(0.0, 0.0, 0.0, false).unwrap().values().count(), 0);
}
