//! Persistence boundary for alunos.
//!
//! Handlers depend on [`AlunoStore`] rather than a concrete pool, so the
//! application state can carry either the PostgreSQL-backed store or the
//! in-memory one (used by tests and by `STORE_BACKEND=memory`).

use alunos_core::types::DbId;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::aluno::{Aluno, AlunoInput};
use crate::models::audit::AuditFields;
use crate::repositories::AlunoRepo;
use crate::DbPool;

/// Operations the API needs from the persistence layer.
///
/// Reads never return soft-deleted rows; `update` and `delete` report a
/// missing (or already deleted) row as `None` / `false`, not as an error.
#[async_trait]
pub trait AlunoStore: Send + Sync {
    /// All live alunos in insertion order.
    async fn list(&self) -> Result<Vec<Aluno>, sqlx::Error>;

    async fn create(&self, input: &AlunoInput) -> Result<Aluno, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Aluno>, sqlx::Error>;

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Aluno>, sqlx::Error>;

    async fn update(&self, id: DbId, input: &AlunoInput) -> Result<Option<Aluno>, sqlx::Error>;

    /// Soft-delete. Returns `true` if a live row was marked deleted.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Cheap reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`AlunoStore`] over a PostgreSQL pool, delegating to [`AlunoRepo`].
#[derive(Clone)]
pub struct PgAlunoStore {
    pool: DbPool,
}

impl PgAlunoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AlunoStore for PgAlunoStore {
    async fn list(&self) -> Result<Vec<Aluno>, sqlx::Error> {
        AlunoRepo::list(&self.pool).await
    }

    async fn create(&self, input: &AlunoInput) -> Result<Aluno, sqlx::Error> {
        AlunoRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Aluno>, sqlx::Error> {
        AlunoRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Aluno>, sqlx::Error> {
        AlunoRepo::find_by_cpf(&self.pool, cpf).await
    }

    async fn update(&self, id: DbId, input: &AlunoInput) -> Result<Option<Aluno>, sqlx::Error> {
        AlunoRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        AlunoRepo::soft_delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MemoryTable {
    rows: Vec<Aluno>,
    next_id: DbId,
}

/// [`AlunoStore`] kept in process memory.
///
/// Mirrors the SQL semantics: ids start at 1 and only grow, rows keep
/// insertion order, and deletes only stamp `deleted_at`.
#[derive(Debug)]
pub struct MemoryAlunoStore {
    table: RwLock<MemoryTable>,
}

impl Default for MemoryAlunoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAlunoStore {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Start from pre-existing rows, kept verbatim (ids and timestamps
    /// included). New inserts continue after the highest seeded id.
    pub fn with_rows(rows: Vec<Aluno>) -> Self {
        let next_id = rows.iter().map(Aluno::id).max().unwrap_or(0) + 1;
        Self {
            table: RwLock::new(MemoryTable { rows, next_id }),
        }
    }

    /// Number of stored rows, soft-deleted ones included.
    pub async fn row_count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl AlunoStore for MemoryAlunoStore {
    async fn list(&self) -> Result<Vec<Aluno>, sqlx::Error> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|a| !a.audit.is_deleted())
            .cloned()
            .collect())
    }

    async fn create(&self, input: &AlunoInput) -> Result<Aluno, sqlx::Error> {
        let mut table = self.table.write().await;
        let now = Utc::now();
        let aluno = Aluno {
            audit: AuditFields {
                id: table.next_id,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
            nome: input.nome.clone(),
            cpf: input.cpf.clone(),
            rg: input.rg.clone(),
        };
        table.next_id += 1;
        table.rows.push(aluno.clone());
        Ok(aluno)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Aluno>, sqlx::Error> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|a| a.id() == id && !a.audit.is_deleted())
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Aluno>, sqlx::Error> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|a| a.cpf == cpf && !a.audit.is_deleted())
            .cloned())
    }

    async fn update(&self, id: DbId, input: &AlunoInput) -> Result<Option<Aluno>, sqlx::Error> {
        let mut table = self.table.write().await;
        let Some(aluno) = table
            .rows
            .iter_mut()
            .find(|a| a.id() == id && !a.audit.is_deleted())
        else {
            return Ok(None);
        };

        aluno.nome = input.nome.clone();
        aluno.cpf = input.cpf.clone();
        aluno.rg = input.rg.clone();
        aluno.audit.updated_at = Utc::now();
        Ok(Some(aluno.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut table = self.table.write().await;
        match table
            .rows
            .iter_mut()
            .find(|a| a.id() == id && !a.audit.is_deleted())
        {
            Some(aluno) => {
                let now = Utc::now();
                aluno.audit.deleted_at = Some(now);
                aluno.audit.updated_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
