//! Per-character scoring of a guess against the solution.
//!
//! # Examples
//!
//! ```
//! use nerditt::comparator::{check_guess, is_solved, CharStatus::*};
//!
//! let statuses = check_guess("21+43=46", "12+34=46");
//! assert_eq!(statuses, vec![Present, Present, Correct, Present, Present, Correct, Correct, Correct]);
//! assert!(!is_solved(&statuses));
//! ```

use std::collections::HashMap;
use std::fmt;

/// Status of one guessed character.
///
/// `Empty` marks a cell that hasn't been scored yet; [`check_guess`] never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharStatus {
    Correct,
    Present,
    Absent,
    Empty,
}

impl CharStatus {
    fn rank(self) -> u8 {
        match self {
            CharStatus::Empty => 0,
            CharStatus::Absent => 1,
            CharStatus::Present => 2,
            CharStatus::Correct => 3,
        }
    }

    /// Keep the more informative of two statuses for the same character
    /// (`Correct` > `Present` > `Absent` > `Empty`).
    #[must_use]
    pub fn merge(self, other: CharStatus) -> CharStatus {
        if other.rank() > self.rank() { other } else { self }
    }

    /// Single-character tile: `G` correct, `y` present, `.` absent, `_` empty.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            CharStatus::Correct => 'G',
            CharStatus::Present => 'y',
            CharStatus::Absent => '.',
            CharStatus::Empty => '_',
        }
    }
}

impl fmt::Display for CharStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            CharStatus::Correct => "CORRECT",
            CharStatus::Present => "PRESENT",
            CharStatus::Absent => "ABSENT",
            CharStatus::Empty => "EMPTY",
        };
        write!(f, "{s}")
    }
}

/// Score `guess` against `solution`, one status per guess character.
///
/// Exact matches are credited first; remaining characters are marked
/// `Present` only while the solution still has unclaimed copies of them, so
/// no solution character is credited twice.
///
/// Inputs are not validated. Callers are expected to pass two validated
/// equations of the same length; guess positions past the end of a shorter
/// solution can only be `Present` or `Absent`.
#[must_use]
pub fn check_guess(guess: &str, solution: &str) -> Vec<CharStatus> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let solution_chars: Vec<char> = solution.chars().collect();

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &solution_chars {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let mut statuses = vec![CharStatus::Absent; guess_chars.len()];

    // First pass: exact positions
    for (i, &c) in guess_chars.iter().enumerate() {
        if solution_chars.get(i) == Some(&c) {
            statuses[i] = CharStatus::Correct;
            if let Some(count) = remaining.get_mut(&c) {
                *count -= 1;
            }
        }
    }

    // Second pass: misplaced characters, while copies remain
    for (i, &c) in guess_chars.iter().enumerate() {
        if statuses[i] == CharStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&c).filter(|count| **count > 0) {
            statuses[i] = CharStatus::Present;
            *count -= 1;
        }
    }

    statuses
}

/// `true` when every status is `Correct` (and there is at least one).
#[must_use]
pub fn is_solved(statuses: &[CharStatus]) -> bool {
    !statuses.is_empty() && statuses.iter().all(|&s| s == CharStatus::Correct)
}

/// Render statuses as a tile line, e.g. `yyGyyGGG`.
#[must_use]
pub fn tiles(statuses: &[CharStatus]) -> String {
    statuses.iter().map(|s| s.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharStatus::{Absent, Correct, Present};

    #[test]
    fn test_exact_match_is_all_correct() {
        let statuses = check_guess("12+34=46", "12+34=46");
        assert_eq!(statuses, vec![Correct; 8]);
        assert!(is_solved(&statuses));
    }

    #[test]
    fn test_swapped_digits() {
        let expected = [
            (0, '2', Present),
            (1, '1', Present),
            (2, '+', Correct),
            (3, '4', Present), // the other '4' of the solution is claimed by position 6
            (4, '3', Present),
            (5, '=', Correct),
            (6, '4', Correct),
            (7, '6', Correct),
        ];
        let statuses = check_guess("21+43=46", "12+34=46");
        for (i, c, status) in expected {
            assert_eq!(statuses[i], status, "position {i} ('{c}')");
        }
        assert_eq!(statuses.len(), expected.len());
    }

    #[test]
    fn test_unrelated_characters_are_absent() {
        assert_eq!(check_guess("5", "7"), vec![Absent]);
        let mut expected = vec![Absent; 8];
        expected[5] = Correct;
        assert_eq!(check_guess("777*7=77", "12+34=46"), expected);
    }

    #[test]
    fn test_multiplicity_caps_credit() {
        // two '1's in the solution, three in the guess
        let statuses = check_guess("111", "1x1");
        assert_eq!(statuses, vec![Correct, Absent, Correct]);

        let statuses = check_guess("1+11=12", "31+1=32");
        let credited = "1+11=12"
            .chars()
            .zip(&statuses)
            .filter(|(c, s)| *c == '1' && **s != Absent)
            .count();
        assert_eq!(credited, 2);
    }

    #[test]
    fn test_exact_match_beats_earlier_misplaced() {
        // the only '4' in the solution is at position 2; guess has '4' at 0 and 2
        assert_eq!(check_guess("4+4", "1+4"), vec![Absent, Correct, Correct]);
    }

    #[test]
    fn test_present_credited_left_to_right() {
        // one '7' available for two misplaced guesses
        assert_eq!(check_guess("77x", "xy7"), vec![Present, Absent, Present]);
        assert_eq!(check_guess("77xy", "xy7z"), vec![Present, Absent, Present, Present]);
    }

    #[test]
    fn test_idempotent() {
        let first = check_guess("9*8-7=65", "65+7=72");
        let second = check_guess("9*8-7=65", "65+7=72");
        assert_eq!(first, second);
    }

    #[test]
    fn test_never_empty() {
        for (guess, solution) in [("12+34=46", "99*9=891"), ("0+0+0=00", "10+20=30")] {
            assert!(!check_guess(guess, solution).contains(&CharStatus::Empty));
        }
    }

    #[test]
    fn test_length_follows_guess() {
        assert_eq!(check_guess("12", "1234").len(), 2);
        // beyond the solution's end only misplaced credit is possible
        assert_eq!(check_guess("1221", "12"), vec![Correct, Correct, Absent, Absent]);
        assert_eq!(check_guess("3321", "12"), vec![Absent, Absent, Present, Present]);
    }

    #[test]
    fn test_is_solved_edge_cases() {
        assert!(!is_solved(&[]));
        assert!(!is_solved(&[Correct, Present]));
        assert!(!is_solved(&[Correct, CharStatus::Empty]));
    }

    #[test]
    fn test_merge_ranking() {
        assert_eq!(Absent.merge(Present), Present);
        assert_eq!(Present.merge(Absent), Present);
        assert_eq!(Correct.merge(Present), Correct);
        assert_eq!(CharStatus::Empty.merge(Absent), Absent);
        assert_eq!(Absent.merge(CharStatus::Empty), Absent);
    }

    #[test]
    fn test_tiles() {
        assert_eq!(tiles(&check_guess("21+43=46", "12+34=46")), "yyGyyGGG");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Correct).unwrap(), r#""CORRECT""#);
        assert_eq!(serde_json::to_string(&CharStatus::Empty).unwrap(), r#""EMPTY""#);
        assert_eq!(serde_json::from_str::<CharStatus>(r#""PRESENT""#).unwrap(), Present);
        assert_eq!(Absent.to_string(), "ABSENT");
    }
}
