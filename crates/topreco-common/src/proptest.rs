//! Property-based tests for the matchers and the timestamp formatter.

use crate::error::TimestampError;
use crate::matcher::{SampleMatcher, make_string_check, make_string_check_begin};
use crate::timestamp::{format_timestamp_with_offset, is_timestamp_shape};
use proptest::prelude::*;
use time::UtcOffset;

// ============================================================================
// Strategies
// ============================================================================

/// Sample-like names, including non-ASCII characters.
fn arb_sample_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_µé-]{1,12}").unwrap()
}

fn arb_reference_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_sample_name(), 1..8)
}

/// Seconds covering years 1..=9999.
fn arb_unix_secs() -> impl Strategy<Value = i64> {
    -62_135_596_800i64..253_402_214_400i64
}

fn arb_offset() -> impl Strategy<Value = UtcOffset> {
    (-12i8..=14, prop_oneof![Just(0i8), Just(30), Just(45)]).prop_map(|(h, m)| {
        let m = if h < 0 { -m } else { m };
        UtcOffset::from_hms(h, m, 0).unwrap()
    })
}

// ============================================================================
// Exact matching
// ============================================================================

proptest! {
    #[test]
    fn exact_is_set_membership(refs in arb_reference_list(), candidate in ".{0,12}") {
        let check = make_string_check(refs.clone());
        prop_assert_eq!(check(candidate.as_str()), refs.contains(&candidate));
    }

    #[test]
    fn exact_ignores_reference_order(mut refs in arb_reference_list(), candidate in arb_sample_name()) {
        let forward = SampleMatcher::exact(refs.clone());
        refs.reverse();
        let backward = SampleMatcher::exact(refs);
        prop_assert_eq!(forward.matches(&candidate), backward.matches(&candidate));
    }
}

// ============================================================================
// Prefix matching
// ============================================================================

proptest! {
    #[test]
    fn prefix_accepts_extensions_of_any_reference(
        refs in arb_reference_list(),
        idx in any::<prop::sample::Index>(),
        suffix in "[a-z]{0,6}",
    ) {
        let reference = idx.get(&refs).clone();
        let check = make_string_check_begin(refs.clone());
        prop_assert!(check(reference.as_str()));
        let extended = format!("{reference}{suffix}");
        prop_assert!(check(extended.as_str()));
    }

    #[test]
    fn prefix_entries_before_first_empty_still_match(
        before in arb_reference_list(),
        after in arb_reference_list(),
        idx in any::<prop::sample::Index>(),
    ) {
        let mut refs = before.clone();
        refs.push(String::new());
        refs.extend(after);
        let check = make_string_check_begin(refs);
        prop_assert!(check(idx.get(&before).as_str()));
        prop_assert!(check(""));
    }

    #[test]
    fn prefix_leading_empty_entry_matches_only_empty(
        rest in arb_reference_list(),
        candidate in arb_sample_name(),
    ) {
        let mut refs = vec![String::new()];
        refs.extend(rest);
        let check = make_string_check_begin(refs);
        prop_assert!(check(""));
        prop_assert!(!check(candidate.as_str()));
    }

    #[test]
    fn prefix_without_empty_entries_is_any_starts_with(
        refs in arb_reference_list(),
        candidate in ".{0,12}",
    ) {
        let expected = refs.iter().any(|r| candidate.starts_with(r.as_str()));
        prop_assert_eq!(SampleMatcher::prefix(refs).matches(&candidate), expected);
    }
}

// ============================================================================
// Wildcard matching and filtering
// ============================================================================

proptest! {
    #[test]
    fn wildcard_without_stars_is_exact(refs in arb_reference_list(), candidate in arb_sample_name()) {
        prop_assert_eq!(
            SampleMatcher::wildcard(refs.clone()).matches(&candidate),
            SampleMatcher::exact(refs).matches(&candidate)
        );
    }

    #[test]
    fn wildcard_contains_pattern(needle in arb_sample_name(), pre in "[a-z]{0,4}", post in "[a-z]{0,4}") {
        let m = SampleMatcher::wildcard([format!("*{needle}*")]);
        let candidate = format!("{pre}{needle}{post}");
        prop_assert!(m.matches(&candidate));
    }

    #[test]
    fn filter_is_ordered_subset(refs in arb_reference_list(), candidates in prop::collection::vec(arb_sample_name(), 0..16)) {
        let m = SampleMatcher::prefix(refs);
        let kept = m.filter(candidates.iter().map(String::as_str));
        let expected: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|c| m.matches(c))
            .collect();
        prop_assert_eq!(kept, expected);
    }
}

// ============================================================================
// Timestamps
// ============================================================================

proptest! {
    #[test]
    fn formatted_timestamps_have_fixed_shape(secs in arb_unix_secs(), offset in arb_offset()) {
        // Offsets can push the first/last day out of 1..=9999; only range errors are allowed.
        match format_timestamp_with_offset(secs, offset) {
            Ok(s) => {
                prop_assert!(is_timestamp_shape(&s), "{}", s);
            }
            Err(TimestampError::OutOfRange { .. }) => {}
            Err(other) => {
                prop_assert!(false, "unexpected error: {:?}", other);
            }
        }
    }

    #[test]
    fn utc_formatting_never_fails_in_four_digit_years(secs in arb_unix_secs()) {
        let s = format_timestamp_with_offset(secs, UtcOffset::UTC);
        prop_assert!(s.is_ok(), "{:?}", s);
    }
}
