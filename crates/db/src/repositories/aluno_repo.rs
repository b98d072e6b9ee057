//! Repository for the `alunos` table.

use alunos_core::types::DbId;
use sqlx::PgPool;

use crate::models::aluno::{Aluno, AlunoInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, updated_at, deleted_at, nome, cpf, rg";

/// Provides CRUD operations for alunos. Soft-deleted rows are invisible to
/// every read and write below.
pub struct AlunoRepo;

impl AlunoRepo {
    /// Insert a new aluno, returning the created row.
    pub async fn create(pool: &PgPool, input: &AlunoInput) -> Result<Aluno, sqlx::Error> {
        let query = format!(
            "INSERT INTO alunos (nome, cpf, rg)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aluno>(&query)
            .bind(&input.nome)
            .bind(&input.cpf)
            .bind(&input.rg)
            .fetch_one(pool)
            .await
    }

    /// List all alunos in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Aluno>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM alunos WHERE deleted_at IS NULL ORDER BY id ASC");
        sqlx::query_as::<_, Aluno>(&query).fetch_all(pool).await
    }

    /// Find an aluno by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Aluno>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alunos WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Aluno>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first aluno with the given CPF.
    ///
    /// CPF is not unique in the schema; the oldest matching row wins.
    pub async fn find_by_cpf(pool: &PgPool, cpf: &str) -> Result<Option<Aluno>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alunos
             WHERE cpf = $1 AND deleted_at IS NULL
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Aluno>(&query)
            .bind(cpf)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable field of an aluno.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AlunoInput,
    ) -> Result<Option<Aluno>, sqlx::Error> {
        let query = format!(
            "UPDATE alunos SET
                nome = $2,
                cpf = $3,
                rg = $4,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aluno>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.cpf)
            .bind(&input.rg)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an aluno by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE alunos SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
