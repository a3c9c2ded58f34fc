pub mod expr;
mod tokens;

// Re-export the public API so call sites don't need the submodule paths.
pub use expr::{parse_expression, Expr};
pub(crate) use tokens::number_tokens;
