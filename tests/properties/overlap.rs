//! Overlap evaluator invariants.

use cavalcade::DateRange;
use chrono::{Duration, NaiveDate};
use proptest::option;
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| epoch() + Duration::days(offset))
}

/// Ranges with optional start and optional end (end >= start when both set).
fn arb_range() -> impl Strategy<Value = DateRange> {
    (option::of(arb_date()), option::of(0i64..30)).prop_map(|(start, span)| DateRange {
        start,
        end: match (start, span) {
            (Some(start), Some(days)) => Some(start + Duration::days(days)),
            _ => None,
        },
    })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_range(), b in arb_range()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_is_reflexive_exactly_for_applicable_ranges(range in arb_range()) {
        prop_assert_eq!(range.overlaps(&range), range.is_applicable());
    }

    #[test]
    fn disjoint_ranges_never_overlap(
        start in arb_date(),
        len_a in 0i64..30,
        gap in 1i64..30,
        len_b in 0i64..30,
    ) {
        let a = DateRange::new(start, start + Duration::days(len_a));
        let b_start = start + Duration::days(len_a + gap);
        let b = DateRange::new(b_start, b_start + Duration::days(len_b));
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
    }

    #[test]
    fn ranges_sharing_their_boundary_day_overlap(
        start in arb_date(),
        len_a in 0i64..30,
        len_b in 0i64..30,
    ) {
        let shared = start + Duration::days(len_a);
        let a = DateRange::new(start, shared);
        let b = DateRange::new(shared, shared + Duration::days(len_b));
        prop_assert!(a.overlaps(&b));
        prop_assert!(b.overlaps(&a));
    }

    #[test]
    fn day_count_is_inclusive_of_both_ends(start in arb_date(), span in 0i64..30) {
        let range = DateRange::new(start, start + Duration::days(span));
        prop_assert_eq!(range.day_count(), Some(span + 1));
    }

    #[test]
    fn single_day_range_equals_its_explicit_form(day in arb_date()) {
        let implicit = DateRange::single(day);
        let explicit = DateRange::new(day, day);
        prop_assert_eq!(implicit.overlaps(&explicit), true);
        prop_assert_eq!(implicit.day_count(), explicit.day_count());
    }
}
