use digit_duel::{calculate_feedback, Feedback};
use proptest::prelude::*;

fn digits(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn guess_target_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..=8).prop_flat_map(|len| (digits(len), digits(len)))
}

#[test]
fn duplicate_digits_count_as_multiset() {
    assert_eq!(
        calculate_feedback("1223", "2213"),
        Feedback {
            correct_digits: 4,
            correct_positions: 2
        }
    );
}

#[test]
fn no_overlap_scores_zero() {
    assert_eq!(calculate_feedback("123", "456"), Feedback::default());
}

#[test]
fn correct_digits_includes_positional_matches() {
    let fb = calculate_feedback("125", "123");
    assert_eq!(fb.correct_positions, 2);
    assert_eq!(fb.correct_digits, 2);
}

#[test]
fn repeated_guess_digit_is_capped_by_target() {
    let fb = calculate_feedback("111", "120");
    assert_eq!(fb.correct_digits, 1);
    assert_eq!(fb.correct_positions, 1);
}

#[test]
fn feedback_message_format() {
    let fb = calculate_feedback("312", "123");
    assert_eq!(fb.to_string(), "Correct digits: 3, Correct positions: 0");
}

proptest! {
    #[test]
    fn guess_against_itself_is_solved(len in 1usize..=10, seed in any::<u64>()) {
        let s: String = (0..len)
            .map(|i| char::from(b'0' + ((seed >> (i % 16 * 4)) & 0x7) as u8))
            .collect();
        let fb = calculate_feedback(&s, &s);
        prop_assert_eq!(fb.correct_digits, len);
        prop_assert_eq!(fb.correct_positions, len);
        prop_assert!(fb.is_solved(len));
    }

    #[test]
    fn positions_bounded_by_digits_bounded_by_len((g, t) in guess_target_pair()) {
        let fb = calculate_feedback(&g, &t);
        prop_assert!(fb.correct_positions <= fb.correct_digits);
        prop_assert!(fb.correct_digits <= g.len());
    }

    #[test]
    fn feedback_is_symmetric((g, t) in guess_target_pair()) {
        prop_assert_eq!(calculate_feedback(&g, &t), calculate_feedback(&t, &g));
    }
}
