//! Match counting and probability tests.

#![allow(clippy::float_cmp)]

use proptest::prelude::*;
use snaprs::{
    Card, MatchBreakdown, MatchCounts, MatchKind, Suit, estimate_match_probability, match_kind,
    percent_label, record_draw, rounded_percent,
};

const fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, value)
}

fn suit_strategy() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (suit_strategy(), 1u8..=13).prop_map(|(suit, value)| Card::new(suit, value))
}

fn counts_strategy() -> impl Strategy<Value = MatchCounts> {
    (0u32..60, 0u32..60).prop_map(|(values, suits)| MatchCounts::new(values, suits))
}

#[test]
fn first_draw_changes_nothing() {
    let counts = MatchCounts::new(2, 5);
    let (updated, kind) = record_draw(None, &card(Suit::Hearts, 4), counts);
    assert_eq!(updated, counts);
    assert_eq!(kind, MatchKind::NoMatch);
}

#[test]
fn value_match_takes_precedence_over_suit() {
    let previous = card(Suit::Clubs, 9);
    let current = card(Suit::Clubs, 9);
    let (updated, kind) = record_draw(Some(&previous), &current, MatchCounts::default());
    assert_eq!(kind, MatchKind::Value);
    assert_eq!(updated, MatchCounts::new(1, 0));
}

#[test]
fn suit_match_with_different_value() {
    let previous = card(Suit::Clubs, 2);
    let current = card(Suit::Clubs, 12);
    assert_eq!(match_kind(&previous, &current), MatchKind::Suit);

    let mut counts = MatchCounts::new(3, 1);
    assert_eq!(counts.record(Some(&previous), &current), MatchKind::Suit);
    assert_eq!(counts, MatchCounts::new(3, 2));
    assert_eq!(counts.total(), 5);
}

#[test]
fn images_do_not_affect_matching() {
    let previous = card(Suit::Spades, 1).with_image("a.png");
    let current = card(Suit::Hearts, 1).with_image("b.png");
    assert_eq!(match_kind(&previous, &current), MatchKind::Value);
}

#[test]
fn match_kind_labels() {
    assert_eq!(MatchKind::Value.to_string(), "value");
    assert_eq!(MatchKind::Suit.to_string(), "suit");
    assert_eq!(MatchKind::NoMatch.to_string(), "none");
    assert_eq!(MatchKind::Value.snap_label(), Some("snap value!"));
    assert_eq!(MatchKind::Suit.snap_label(), Some("snap suit!"));
    assert_eq!(MatchKind::NoMatch.snap_label(), None);
    assert!(MatchKind::Suit.is_match());
    assert!(!MatchKind::NoMatch.is_match());
}

#[test]
fn fresh_deck_after_first_draw_is_one_third() {
    let breakdown = MatchBreakdown::compute(51, MatchCounts::default());
    assert_eq!(breakdown.suit_matches_remaining, 13.0);
    assert_eq!(breakdown.value_matches_remaining, 4.0);
    assert!((breakdown.suit_probability - 13.0 / 51.0).abs() < 1e-12);
    assert!((breakdown.value_probability - 4.0 / 51.0).abs() < 1e-12);
    assert_eq!(breakdown.both_matches_remaining, -34.0);
    assert_eq!(breakdown.both_probability, 0.0);

    let p = estimate_match_probability(51, MatchCounts::default());
    assert!((p - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(percent_label(p, 2), "33.33%");
}

#[test]
fn one_value_match_with_fifty_left() {
    let p = estimate_match_probability(50, MatchCounts::new(1, 0));
    assert!((p - 0.32).abs() < 1e-12);
    assert_eq!(percent_label(p, 2), "32.00%");
    assert_eq!(rounded_percent(p, 2), 32.0);
}

#[test]
fn overlap_term_applies_near_the_end_of_the_deck() {
    // 13 + 4 - 10 = 7 cards would have to match both ways.
    let breakdown = MatchBreakdown::compute(10, MatchCounts::default());
    assert_eq!(breakdown.both_matches_remaining, 7.0);
    assert!((breakdown.both_probability - 0.7).abs() < 1e-12);
    assert!((breakdown.combined - 1.0).abs() < 1e-12);
    assert!((breakdown.probability - 1.0).abs() < 1e-12);
}

#[test]
fn combined_above_one_is_clamped() {
    let breakdown = MatchBreakdown::compute(2, MatchCounts::default());
    // 13/2 + 4/2 - 15/2
    assert!((breakdown.combined - 1.0).abs() < 1e-12);

    let breakdown = MatchBreakdown::compute(20, MatchCounts::default());
    // 13/20 + 4/20, no overlap
    assert!((breakdown.combined - 0.85).abs() < 1e-12);

    let breakdown = MatchBreakdown::compute(16, MatchCounts::default());
    // 13/16 + 4/16 - 1/16
    assert!((breakdown.probability - 1.0).abs() < 1e-12);
}

#[test]
fn counts_beyond_deck_bounds_clamp_to_zero() {
    let breakdown = MatchBreakdown::compute(30, MatchCounts::new(10, 20));
    assert_eq!(breakdown.value_matches_remaining, -6.0);
    assert_eq!(breakdown.suit_matches_remaining, -7.0);
    assert!(breakdown.combined < 0.0);
    assert_eq!(breakdown.probability, 0.0);
}

#[test]
fn percent_label_rounds_exact_ties_up() {
    let p = estimate_match_probability(32, MatchCounts::new(4, 4));
    assert_eq!(p, 9.0 / 32.0);
    assert_eq!(percent_label(p, 2), "28.13%");
    assert_eq!(
        percent_label(estimate_match_probability(32, MatchCounts::new(4, 0)), 2),
        "40.63%"
    );
    assert_eq!(percent_label(0.125, 0), "13%");
}

#[test]
fn total_saturates_on_out_of_range_counts() {
    assert_eq!(MatchCounts::new(u32::MAX, 1).total(), u32::MAX);
    assert_eq!(MatchCounts::new(3, 4).total(), 7);
}

#[test]
fn percent_helpers_follow_precision() {
    assert_eq!(percent_label(0.5, 0), "50%");
    assert_eq!(percent_label(0.123_456, 3), "12.346%");
    assert_eq!(rounded_percent(0.123_456, 1), 12.3);
}

proptest! {
    #[test]
    fn equal_values_count_as_value_match(previous in card_strategy(), suit in suit_strategy(), counts in counts_strategy()) {
        let current = Card::new(suit, previous.value);
        let (updated, kind) = record_draw(Some(&previous), &current, counts);
        prop_assert_eq!(kind, MatchKind::Value);
        prop_assert_eq!(updated.values, counts.values + 1);
        prop_assert_eq!(updated.suits, counts.suits);
    }

    #[test]
    fn same_suit_different_value_counts_as_suit_match(previous in card_strategy(), offset in 1u8..13, counts in counts_strategy()) {
        let value = (previous.value - 1 + offset) % 13 + 1;
        let current = Card::new(previous.suit, value);
        let (updated, kind) = record_draw(Some(&previous), &current, counts);
        prop_assert_eq!(kind, MatchKind::Suit);
        prop_assert_eq!(updated.suits, counts.suits + 1);
        prop_assert_eq!(updated.values, counts.values);
    }

    #[test]
    fn different_value_and_suit_is_no_match(previous in card_strategy(), current in card_strategy(), counts in counts_strategy()) {
        prop_assume!(previous.value != current.value && previous.suit != current.suit);
        let (updated, kind) = record_draw(Some(&previous), &current, counts);
        prop_assert_eq!(kind, MatchKind::NoMatch);
        prop_assert_eq!(updated, counts);
    }

    #[test]
    fn no_previous_card_never_changes_counts(current in card_strategy(), counts in counts_strategy()) {
        let (updated, kind) = record_draw(None, &current, counts);
        prop_assert_eq!(kind, MatchKind::NoMatch);
        prop_assert_eq!(updated, counts);
    }

    #[test]
    fn probability_is_always_in_unit_interval(remaining in 1usize..=52, counts in counts_strategy()) {
        let p = estimate_match_probability(remaining, counts);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn probability_is_deterministic(remaining in 1usize..=52, counts in counts_strategy()) {
        prop_assert_eq!(
            estimate_match_probability(remaining, counts),
            estimate_match_probability(remaining, counts)
        );
    }
}
