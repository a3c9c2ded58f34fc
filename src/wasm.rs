use crate::comparator::check_guess;
use crate::errors::EvalError;
use crate::evaluator::evaluate_expression;
use crate::keyboard::key_statuses;
use crate::log::init_logger;
use crate::validator::is_valid_equation;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E003", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<&EvalError> for WasmError {
    fn from(e: &EvalError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Validate all internal regex patterns compile successfully.
///
/// Forces LazyLock initialization so a bad pattern fails at startup rather
/// than on the first guess.
///
/// ## IMPORTANT: Adding a new regex?
/// If you add a new `LazyLock<Regex>` anywhere in the codebase, you MUST add it here.
fn validate_internal_regexes() {
    let _ = &*crate::equation_char::EQUATION_CHARS_RE;
    log::debug!("Internal regex patterns validated successfully");
}

/// Initialize logging and validation with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    validate_internal_regexes();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: `(candidate: string) => { valid: boolean, reason?: string }`
#[wasm_bindgen]
pub fn validate_equation_wasm(candidate: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&is_valid_equation(candidate))
        .map_err(|e| serialization_error("WASM001", "validation result", e))
}

/// JS entry: `(expr: string) => number`, throwing a structured error on failure.
#[wasm_bindgen]
pub fn evaluate_expression_wasm(expr: &str) -> Result<f64, JsValue> {
    evaluate_expression(expr).map_err(|e| WasmError::from(e.as_ref()).into())
}

/// JS entry: `(guess: string, solution: string) => ("CORRECT" | "PRESENT" | "ABSENT")[]`
#[wasm_bindgen]
pub fn check_guess_wasm(guess: &str, solution: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&check_guess(guess, solution))
        .map_err(|e| serialization_error("WASM002", "guess statuses", e))
}

/// JS entry: `(guesses: string[], solution: string) => Record<string, status>`
#[wasm_bindgen]
pub fn key_statuses_wasm(guesses: JsValue, solution: &str) -> Result<JsValue, JsValue> {
    let guesses: Vec<String> = serde_wasm_bindgen::from_value(guesses).map_err(|e| {
        JsValue::from(WasmError {
            code: "WASM003".to_string(),
            message: format!("guesses must be string[]: {e}"),
            description: "Invalid guesses format".to_string(),
            details: "The guesses parameter must be a JavaScript array of strings.".to_string(),
            help: Some("Pass the submitted rows, e.g. ['12+34=46', '10+20=30']".to_string()),
        })
    })?;

    let by_key: std::collections::BTreeMap<String, _> = key_statuses(&guesses, solution)
        .into_iter()
        .map(|(c, status)| (c.to_string(), status))
        .collect();

    // maps become plain JS objects rather than `Map`s
    by_key
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| serialization_error("WASM004", "key statuses", e))
}
