use std::collections::BTreeMap;

use crate::comparator::{check_guess, CharStatus};
use crate::equation_char::{DIGIT_CHARS, EQUALS_CHAR, OPERATOR_CHARS};

/// On-screen key rows, top to bottom.
#[must_use]
pub fn key_rows() -> [Vec<char>; 2] {
    let digits = DIGIT_CHARS[1..].chars().chain(DIGIT_CHARS[..1].chars()).collect();
    let symbols = OPERATOR_CHARS.chars().chain([EQUALS_CHAR]).collect();
    [digits, symbols]
}

/// Best status seen for each typed key across all `guesses`.
///
/// A key scored `Correct` anywhere stays `Correct`; otherwise `Present` beats
/// `Absent`. Keys that were never typed are not in the map.
#[must_use]
pub fn key_statuses<S: AsRef<str>>(guesses: &[S], solution: &str) -> BTreeMap<char, CharStatus> {
    let mut statuses = BTreeMap::new();
    for guess in guesses {
        let guess = guess.as_ref();
        for (c, status) in guess.chars().zip(check_guess(guess, solution)) {
            statuses
                .entry(c)
                .and_modify(|best: &mut CharStatus| *best = best.merge(status))
                .or_insert(status);
        }
    }
    statuses
}

/// Status to paint on key `c`, `Empty` if it hasn't been typed.
#[must_use]
pub fn key_status(statuses: &BTreeMap<char, CharStatus>, c: char) -> CharStatus {
    statuses.get(&c).copied().unwrap_or(CharStatus::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharStatus::{Absent, Correct, Present};

    #[test]
    fn test_no_guesses() {
        let statuses = key_statuses::<&str>(&[], "12+34=46");
        assert!(statuses.is_empty());
        assert_eq!(key_status(&statuses, '1'), CharStatus::Empty);
    }

    #[test]
    fn test_single_guess() {
        let statuses = key_statuses(&["21+43=46"], "12+34=46");
        assert_eq!(statuses[&'1'], Present);
        assert_eq!(statuses[&'2'], Present);
        assert_eq!(statuses[&'+'], Correct);
        assert_eq!(statuses[&'4'], Correct); // Present at 3, Correct at 6
        assert_eq!(statuses[&'='], Correct);
        assert_eq!(key_status(&statuses, '9'), CharStatus::Empty);
    }

    #[test]
    fn test_correct_is_never_downgraded() {
        let guesses = vec!["12+34=46".to_string(), "21+43=64".to_string()];
        let statuses = key_statuses(&guesses, "12+35=47");
        assert_eq!(statuses[&'1'], Correct);
        assert_eq!(statuses[&'2'], Correct);
        assert_eq!(statuses[&'6'], Absent);
    }

    #[test]
    fn test_present_and_absent_across_guesses() {
        let statuses = key_statuses(&["99*9=891", "10*9=90"], "9+81=90");
        assert_eq!(statuses[&'9'], Correct);
        assert_eq!(statuses[&'8'], Present);
        assert_eq!(statuses[&'*'], Absent);
        assert_eq!(statuses[&'0'], Correct);
        assert_eq!(statuses[&'1'], Present);
    }

    #[test]
    fn test_key_rows() {
        let [digits, symbols] = key_rows();
        assert_eq!(digits.iter().collect::<String>(), "1234567890");
        assert_eq!(symbols.iter().collect::<String>(), "+-*/=");
    }
}
