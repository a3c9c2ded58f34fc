//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `EvalError`, `ValidationError`, `GameError` and `StoreError`
//! via their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io::{self, Write};

use nerditt::errors::{EvalError, ValidationError};
use nerditt::game::{GameError, GameStatus};
use nerditt::store::{SavedGame, StoreError};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            writeln!($out, "### {}: {}\n", error.code(), error.description())?;
            writeln!($out, "**Details:** {}\n", error.details())?;

            if let Some(help_text) = error.help() {
                writeln!($out, "**How to fix:**")?;
                writeln!($out, "```")?;
                writeln!($out, "{help_text}")?;
                writeln!($out, "```\n")?;
            }

            writeln!($out, "**Example error message:**")?;
            writeln!($out, "```")?;
            writeln!($out, "{error}")?;
            writeln!($out, "```\n")?;

            writeln!($out, "**Detailed format:**")?;
            writeln!($out, "```")?;
            writeln!($out, "{}", error.display_detailed())?;
            writeln!($out, "```\n")?;

            writeln!($out, "---\n")?;
        }
    };
}

fn all_eval_error_variants() -> Vec<EvalError> {
    vec![
        EvalError::UnexpectedChar { found: '=' },
        EvalError::UnexpectedEnd,
        EvalError::DivisionByZero,
        EvalError::TrailingInput { rest: ")".to_string() },
        EvalError::EmptyExpression,
        EvalError::TooComplex { limit: 100 },
    ]
}

fn all_validation_error_variants() -> Vec<ValidationError> {
    vec![
        ValidationError::WrongLength { expected: 8, actual: 7 },
        ValidationError::InvalidCharacters,
        ValidationError::EqualsCount { count: 2 },
        ValidationError::InvalidFormat,
        ValidationError::InvalidSyntax,
        ValidationError::LeadingZero { token: "012".to_string() },
        ValidationError::InvalidEquation(Box::new(EvalError::DivisionByZero)),
        ValidationError::NonIntegerResult { value: 13.5 },
        ValidationError::DoesNotCompute { lhs: 46, rhs: 47 },
    ]
}

fn all_game_error_variants() -> Vec<GameError> {
    vec![
        GameError::NotEnoughCharacters { have: 5, need: 8 },
        GameError::Invalid(ValidationError::DoesNotCompute { lhs: 46, rhs: 47 }),
        GameError::GameOver { status: GameStatus::Won },
    ]
}

fn all_store_error_variants() -> Vec<StoreError> {
    let mut errors = vec![StoreError::Io(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "permission denied",
    ))];
    // a truncated save, as a crash mid-write would leave it
    if let Err(e) = serde_json::from_str::<SavedGame>("{\"solution\":") {
        errors.push(StoreError::Json(e));
    }
    errors.push(StoreError::InvalidKey { key: "../state".to_string() });
    errors
}

fn write_docs(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "- [Evaluation Errors (E001–E006)](#evaluation-errors)")?;
    writeln!(out, "- [Validation Errors (V001–V009)](#validation-errors)")?;
    writeln!(out, "- [Game Errors (G001–G003)](#game-errors)")?;
    writeln!(out, "- [Store Errors (T001–T003)](#store-errors)")?;
    writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n")?;

    writeln!(out, "## Evaluation Errors\n")?;
    writeln!(out, "Errors from parsing or evaluating one side of an equation.\n")?;
    generate_error_docs!(out, all_eval_error_variants());

    writeln!(out, "## Validation Errors\n")?;
    writeln!(out, "Reasons a guess is rejected. The message is what the player sees.\n")?;
    generate_error_docs!(out, all_validation_error_variants());

    writeln!(out, "## Game Errors\n")?;
    writeln!(out, "Refused submissions. The board is left unchanged.\n")?;
    generate_error_docs!(out, all_game_error_variants());

    writeln!(out, "## Store Errors\n")?;
    writeln!(out, "Failures loading or saving progress.\n")?;
    generate_error_docs!(out, all_store_error_variants());

    writeln!(out, "\n## How to Use Error Codes\n")?;
    writeln!(out, "When you see an error like:\n")?;
    writeln!(out, "```")?;
    writeln!(out, "Error: Leading zeros are not allowed (V006)")?;
    writeln!(out, "Write '7' instead of '07'")?;
    writeln!(out, "```\n")?;
    writeln!(out, "1. Note the error code (e.g., `V006`)")?;
    writeln!(out, "2. Look it up in this document for detailed explanation")?;
    writeln!(out, "3. Follow the suggested resolution steps\n")?;

    writeln!(out, "## Error Display Formats\n")?;
    writeln!(out, "Errors are displayed in two formats:\n")?;
    writeln!(out, "### Simple Format")?;
    writeln!(out, "```")?;
    writeln!(out, "Error: <message>")?;
    writeln!(out, "```\n")?;
    writeln!(out, "### Detailed Format (via `display_detailed()`)")?;
    writeln!(out, "```")?;
    writeln!(out, "<message> (<code>)")?;
    writeln!(out, "<help text if available>")?;
    writeln!(out, "```")?;
    Ok(())
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_docs(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_docs_to_string() -> String {
        let mut buf = Vec::new();
        write_docs(&mut buf).unwrap();
        String::from_utf8(buf).expect("Invalid UTF-8 in generated docs")
    }

    #[test]
    fn test_every_code_is_documented() {
        let docs = generate_docs_to_string();
        let codes = (1..=6)
            .map(|i| format!("E{i:03}"))
            .chain((1..=9).map(|i| format!("V{i:03}")))
            .chain((1..=3).map(|i| format!("G{i:03}")))
            .chain((1..=3).map(|i| format!("T{i:03}")));
        for code in codes {
            assert!(docs.contains(&format!("### {code}: ")), "{code} missing from docs");
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = all_eval_error_variants()
            .iter()
            .map(EvalError::code)
            .chain(all_validation_error_variants().iter().map(ValidationError::code))
            .chain(all_game_error_variants().iter().map(GameError::code))
            .chain(all_store_error_variants().iter().map(StoreError::code))
            .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(total, 21);
    }
}
