//! Digit-match scoring between a guess and a secret number.

/// How close a guess came to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Feedback {
    /// Size of the multiset intersection of digit values, positional
    /// matches included.
    pub correct_digits: usize,
    /// Indices where guess and target hold the same digit.
    pub correct_positions: usize,
}

impl Feedback {
    /// True when every one of `digit_count` positions matched.
    pub fn is_solved(&self, digit_count: usize) -> bool {
        self.correct_positions == digit_count
    }
}

impl core::fmt::Display for Feedback {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Correct digits: {}, Correct positions: {}",
            self.correct_digits, self.correct_positions
        )
    }
}

/// Score `guess` against `target`. Both are expected to be equal-length
/// digit strings; extra characters on the longer side and non-digits are
/// ignored.
pub fn calculate_feedback(guess: &str, target: &str) -> Feedback {
    let g = guess.as_bytes();
    let t = target.as_bytes();

    let correct_positions = g
        .iter()
        .zip(t)
        .filter(|(a, b)| a == b && a.is_ascii_digit())
        .count();

    let mut guess_counts = [0usize; 10];
    let mut target_counts = [0usize; 10];
    for (&a, &b) in g.iter().zip(t) {
        if a.is_ascii_digit() {
            guess_counts[(a - b'0') as usize] += 1;
        }
        if b.is_ascii_digit() {
            target_counts[(b - b'0') as usize] += 1;
        }
    }
    let correct_digits = guess_counts
        .iter()
        .zip(target_counts.iter())
        .map(|(a, b)| (*a).min(*b))
        .sum();

    Feedback {
        correct_digits,
        correct_positions,
    }
}
