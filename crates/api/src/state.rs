use std::sync::Arc;

use alunos_db::store::AlunoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Aluno persistence, PostgreSQL-backed or in-memory.
    pub store: Arc<dyn AlunoStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
