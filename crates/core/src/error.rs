use validator::ValidationErrors;

use crate::aluno::describe_validation_errors;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Lookup by a non-key column (e.g. an Aluno by CPF) found nothing.
    #[error("Entity not found: {entity} with {field} {value}")]
    NotFoundBy {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(describe_validation_errors(&errors))
    }
}
