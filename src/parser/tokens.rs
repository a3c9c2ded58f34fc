use crate::equation_char::EquationChar;

/// Split `s` on every operator and `=`, yielding the number tokens in order.
///
/// Adjacent separators (or a separator at either end) produce empty tokens,
/// which is how callers detect malformed input like `1++1=2`.
pub(crate) fn number_tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_separator())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<&str> {
        number_tokens(s).collect()
    }

    #[test]
    fn test_simple_equation() {
        assert_eq!(tokens("12+34=46"), vec!["12", "34", "46"]);
    }

    #[test]
    fn test_every_operator_splits() {
        assert_eq!(tokens("1+2-3*4/5=6"), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_adjacent_operators_give_empty_token() {
        assert_eq!(tokens("1++34=35"), vec!["1", "", "34", "35"]);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(tokens("-5+8=3"), vec!["", "5", "8", "3"]);
        assert_eq!(tokens("5+8=13+"), vec!["5", "8", "13", ""]);
    }

    #[test]
    fn test_no_separators() {
        assert_eq!(tokens("12345678"), vec!["12345678"]);
        assert_eq!(tokens(""), vec![""]);
    }
}
