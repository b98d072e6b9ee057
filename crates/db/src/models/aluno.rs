//! Aluno (student) entity model and DTOs.

use alunos_core::aluno::DIGITS_ONLY;
use alunos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::audit::AuditFields;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `alunos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Aluno {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditFields,
    pub nome: String,
    pub cpf: String,
    pub rg: String,
}

impl Aluno {
    pub fn id(&self) -> DbId {
        self.audit.id
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body for creating an aluno or replacing one wholesale.
///
/// Every write goes through this type, so its rules are the write-side
/// invariants of the table. Audit fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AlunoInput {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    #[validate(
        length(equal = 11, message = "cpf must have exactly 11 characters"),
        regex(path = *DIGITS_ONLY, message = "cpf must contain only digits")
    )]
    pub cpf: String,
    #[validate(
        length(equal = 9, message = "rg must have exactly 9 characters"),
        regex(path = *DIGITS_ONLY, message = "rg must contain only digits")
    )]
    pub rg: String,
}

/// Body for a partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAluno {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
}

impl UpdateAluno {
    /// Overlay the supplied fields on `current`, yielding a full input to
    /// validate and persist.
    pub fn merge_onto(self, current: &Aluno) -> AlunoInput {
        AlunoInput {
            nome: self.nome.unwrap_or_else(|| current.nome.clone()),
            cpf: self.cpf.unwrap_or_else(|| current.cpf.clone()),
            rg: self.rg.unwrap_or_else(|| current.rg.clone()),
        }
    }
}
