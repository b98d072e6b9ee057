//! Field rules for the `Aluno` (student) entity.
//!
//! The rules themselves are attached to the input DTO with `validator`
//! derive attributes; this module owns the shared constants, the compiled
//! digits-only pattern those attributes point at, and the formatting of a
//! failed validation into a single human-readable message.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationErrors;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Exact length of a CPF (taxpayer id), digits only, no punctuation.
pub const CPF_LENGTH: u64 = 11;

/// Exact length of an RG (registry id), digits only, no punctuation.
pub const RG_LENGTH: u64 = 9;

/// Pattern accepted for CPF and RG values. Length is checked separately.
pub const DIGITS_ONLY_PATTERN: &str = r"^[0-9]*$";

/// Compiled form of [`DIGITS_ONLY_PATTERN`].
pub static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIGITS_ONLY_PATTERN).expect("valid regex"));

pub const NOME_REQUIRED_MSG: &str = "nome must not be empty";
pub const CPF_LENGTH_MSG: &str = "cpf must have exactly 11 characters";
pub const CPF_DIGITS_MSG: &str = "cpf must contain only digits";
pub const RG_LENGTH_MSG: &str = "rg must have exactly 9 characters";
pub const RG_DIGITS_MSG: &str = "rg must contain only digits";

// ---------------------------------------------------------------------------
// Error formatting
// ---------------------------------------------------------------------------

/// Flatten every violated rule into one message.
///
/// Fields are sorted by name so the output is stable, and each field lists
/// all of its failed rules: `cpf: <msg>, <msg>; rg: <msg>`.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
