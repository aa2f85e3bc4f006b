//! Property-based tests for combine and reconciliation using proptest.
//!
//! These verify invariants that must hold for *any* well-formed field values,
//! not just the specific cases in `combine_tests.rs` and `reconcile_tests.rs`.

use chrono::{Timelike, Utc};
use chrono_tz::Tz;
use grueplan_time::{combine_in, reconcile, split, Edit, Endpoint, Field, PlanWindow, Side};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A valid `YYYY-MM-DD` in 2023-2026. Day is capped at 28 so every value is a
/// real calendar date.
fn arb_date() -> impl Strategy<Value = String> {
    (2023i32..=2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn arb_time() -> impl Strategy<Value = String> {
    (0u32..=23, 0u32..=59).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

fn arb_endpoint() -> impl Strategy<Value = Endpoint> {
    (arb_date(), arb_time()).prop_map(|(d, t)| Endpoint::new(d, t))
}

fn arb_timezone() -> impl Strategy<Value = Tz> {
    prop_oneof![
        Just(Tz::UTC),
        Just(Tz::America__New_York),
        Just(Tz::America__Los_Angeles),
        Just(Tz::Europe__London),
        Just(Tz::Asia__Tokyo),
    ]
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    let side = prop_oneof![Just(Side::Start), Just(Side::End)];
    prop_oneof![
        (side.clone(), arb_date()).prop_map(|(s, v)| Edit::new(s, Field::Date, v)),
        (side, arb_time()).prop_map(|(s, v)| Edit::new(s, Field::Time, v)),
    ]
}

/// An ordered window: the later of two endpoints becomes the end.
fn arb_window(tz: Tz) -> impl Strategy<Value = PlanWindow> {
    (arb_endpoint(), arb_endpoint()).prop_map(move |(a, b)| {
        let ia = a.to_instant(&tz).unwrap();
        let ib = b.to_instant(&tz).unwrap();
        if ia <= ib {
            PlanWindow::from_instants(&ia, &ib)
        } else {
            PlanWindow::from_instants(&ib, &ia)
        }
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: combine is idempotent with zeroed seconds
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn combine_is_idempotent(date in arb_date(), time in arb_time(), tz in arb_timezone()) {
        let a = combine_in(&tz, &date, &time).unwrap();
        let b = combine_in(&tz, &date, &time).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.second(), 0);
        prop_assert_eq!(a.nanosecond(), 0);
    }
}

// ---------------------------------------------------------------------------
// Property 2: split(combine(d, t)) == (d, t)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn split_round_trips_in_utc(date in arb_date(), time in arb_time()) {
        let instant = combine_in(&Utc, &date, &time).unwrap();
        prop_assert_eq!(split(&instant), Endpoint::new(date, time));
    }
}

// ---------------------------------------------------------------------------
// Property 3: start <= end after any edit
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn reconciled_window_is_ordered(
        (tz, current) in arb_timezone().prop_flat_map(|tz| (Just(tz), arb_window(tz))),
        edit in arb_edit(),
    ) {
        let next = reconcile(&tz, &current, &edit).unwrap();
        let (start, end) = next.instants(&tz).unwrap();
        prop_assert!(start <= end, "{:?} after {} gave start {} > end {}", current, edit, start, end);
    }
}

// ---------------------------------------------------------------------------
// Property 4: the edited endpoint takes the edited value
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn edited_side_keeps_the_edit(current in arb_window(Tz::UTC), edit in arb_edit()) {
        let next = reconcile(&Utc, &current, &edit).unwrap();
        let edited = match edit.side {
            Side::Start => &next.start,
            Side::End => &next.end,
        };
        let value = match edit.field {
            Field::Date => &edited.date,
            Field::Time => &edited.time,
        };
        prop_assert_eq!(value, &edit.value);
    }
}

// ---------------------------------------------------------------------------
// Property 5: an edit that keeps order leaves the other side untouched
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ordered_edit_does_not_drag(current in arb_window(Tz::UTC), edit in arb_edit()) {
        let edited = match edit.side {
            Side::Start => PlanWindow::new(current.start.with_field(edit.field, &edit.value), current.end.clone()),
            Side::End => PlanWindow::new(current.start.clone(), current.end.with_field(edit.field, &edit.value)),
        };
        let (start, end) = edited.instants(&Utc).unwrap();
        prop_assume!(start <= end);

        let next = reconcile(&Utc, &current, &edit).unwrap();
        prop_assert_eq!(next, edited);
    }
}

// ---------------------------------------------------------------------------
// Property 6: whatever reconcile returns combines again
// ---------------------------------------------------------------------------

/// A date with out-of-range components, including years near 0 and 9999 so
/// normalization can produce negative and five-digit years.
fn arb_loose_date() -> impl Strategy<Value = String> {
    let year = prop_oneof![0i32..=120, 9990i32..=10010];
    (year, 0u32..=13, 0u32..=32).prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn arb_loose_time() -> impl Strategy<Value = String> {
    (0u32..=25, 0u32..=75).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

fn arb_loose_edit() -> impl Strategy<Value = Edit> {
    let side = prop_oneof![Just(Side::Start), Just(Side::End)];
    prop_oneof![
        (side.clone(), arb_loose_date()).prop_map(|(s, v)| Edit::new(s, Field::Date, v)),
        (side, arb_loose_time()).prop_map(|(s, v)| Edit::new(s, Field::Time, v)),
    ]
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn reconciled_window_combines_again(
        (tz, current) in arb_timezone().prop_flat_map(|tz| (Just(tz), arb_window(tz))),
        edit in arb_loose_edit(),
    ) {
        let next = reconcile(&tz, &current, &edit).unwrap();
        let (start, end) = next.instants(&tz).unwrap();
        prop_assert!(start <= end);

        // Feed the result back in as the form would.
        let follow_up = Edit::new(Side::End, Field::Time, next.end.time.clone());
        let again = reconcile(&tz, &next, &follow_up).unwrap();
        prop_assert_eq!(again, next);
    }
}
