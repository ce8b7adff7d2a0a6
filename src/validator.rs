//! Input checks shared by every guess and secret-number entry point.

use alloc::string::String;

use crate::common::{GuessError, Validation};

/// Check a guess string against the digit-count and range rules.
///
/// Order matters: format first, then range, then length. Range is judged
/// on the numeric value and length on the literal text, so `"0123"` with
/// three digits is a length error rather than a range error.
pub fn check_guess(raw: &str, digit_count: usize) -> Result<(), GuessError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::Format);
    }

    // Any value with at most `digit_count` significant digits is <= 10^d - 1,
    // which keeps the check overflow-free for arbitrarily long input.
    let significant = raw.trim_start_matches('0').len();
    if significant > digit_count {
        return Err(GuessError::Range { digit_count });
    }

    if raw.len() != digit_count {
        return Err(GuessError::Length { digit_count });
    }
    Ok(())
}

/// [`check_guess`] folded into the `{valid, message}` form the UI consumes.
pub fn validate_guess(raw: &str, digit_count: usize) -> Validation {
    Validation::from(check_guess(raw, digit_count))
}

/// Trim raw input and left-pad short all-digit entries with zeros.
///
/// Returns [`GuessError::Empty`] for blank input. Anything else is returned
/// as-is (after trimming) for [`check_guess`] to judge.
pub fn normalize_input(raw: &str, digit_count: usize) -> Result<String, GuessError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GuessError::Empty);
    }
    let mut out = String::with_capacity(digit_count.max(trimmed.len()));
    if trimmed.len() < digit_count && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        for _ in trimmed.len()..digit_count {
            out.push('0');
        }
    }
    out.push_str(trimmed);
    Ok(out)
}

/// Normalize then validate; the shared path for guesses and secret numbers.
pub fn prepare_guess(raw: &str, digit_count: usize) -> Result<String, GuessError> {
    let guess = normalize_input(raw, digit_count)?;
    check_guess(&guess, digit_count)?;
    Ok(guess)
}

/// Render `value` as a zero-padded string of `digit_count` digits.
pub fn pad_number(value: u64, digit_count: usize) -> String {
    alloc::format!("{:0width$}", value, width = digit_count)
}
