#![allow(dead_code)]

use std::sync::Arc;

use alunos_api::config::{ServerConfig, StoreBackend, DEFAULT_DATABASE_URL};
use alunos_api::router::build_app_router;
use alunos_api::state::AppState;
use alunos_core::types::DbId;
use alunos_db::models::aluno::{Aluno, AlunoInput};
use alunos_db::models::audit::AuditFields;
use alunos_db::store::{AlunoStore, MemoryAlunoStore};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: DEFAULT_DATABASE_URL.to_string(),
        db_max_connections: 1,
        store_backend: StoreBackend::Memory,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn AlunoStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router over a fresh, empty in-memory store. The store handle is returned
/// so tests can inspect what was (or was not) persisted.
pub fn empty_app() -> (Router, Arc<MemoryAlunoStore>) {
    let store = Arc::new(MemoryAlunoStore::new());
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn fixture(id: DbId, created: i64, updated: i64, nome: &str, cpf: &str, rg: &str) -> Aluno {
    Aluno {
        audit: AuditFields {
            id,
            created_at: Utc.timestamp_opt(created, 0).unwrap(),
            updated_at: Utc.timestamp_opt(updated, 0).unwrap(),
            deleted_at: None,
        },
        nome: nome.to_string(),
        cpf: cpf.to_string(),
        rg: rg.to_string(),
    }
}

pub fn tom_araya() -> Aluno {
    fixture(1, 1_734_566_894, 1_734_566_951, "Tom Araya", "12345678901", "112224449")
}

pub fn marty_friedman() -> Aluno {
    fixture(
        2,
        1_734_567_947,
        1_734_567_955,
        "Marty Friedman",
        "11178956903",
        "226587930",
    )
}

/// Router over a store already holding Tom Araya and Marty Friedman.
pub fn seeded_app() -> (Router, Arc<MemoryAlunoStore>) {
    let store = Arc::new(MemoryAlunoStore::with_rows(vec![
        tom_araya(),
        marty_friedman(),
    ]));
    (build_test_app(store.clone()), store)
}

/// A store whose every call fails as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl AlunoStore for UnreachableStore {
    async fn list(&self) -> Result<Vec<Aluno>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn create(&self, _input: &AlunoInput) -> Result<Aluno, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Aluno>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_cpf(&self, _cpf: &str) -> Result<Option<Aluno>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(&self, _id: DbId, _input: &AlunoInput) -> Result<Option<Aluno>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// POST a raw body verbatim, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
