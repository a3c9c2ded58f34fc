// Reusable library API — visible to both CLI and WASM builds
pub mod comparator;
pub mod equation_char;
pub mod errors;
pub mod evaluator;
pub mod game;
pub mod generator;
pub mod keyboard;
pub mod log;
pub mod operator;
pub mod parser;
pub mod store;
pub mod validator;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use comparator::{check_guess, CharStatus};
pub use equation_char::EQUATION_LENGTH;
pub use evaluator::evaluate_expression;
pub use validator::{is_valid_equation, validate_equation, ValidationResult};
