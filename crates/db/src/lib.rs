//! PostgreSQL access for the alunos service.
//!
//! Pool creation and schema bootstrap live here, alongside the row models,
//! the SQL repository, and the [`store::AlunoStore`] abstraction handlers
//! are written against.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `alunos` table and its CPF index if they do not exist yet.
///
/// There is no versioning: this only ever adds what is missing and never
/// alters an existing table.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS alunos (
            id         BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ NULL,
            nome       TEXT NOT NULL,
            cpf        TEXT NOT NULL,
            rg         TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_alunos_cpf ON alunos (cpf)")
        .execute(pool)
        .await?;

    tracing::debug!("alunos schema ensured");
    Ok(())
}
