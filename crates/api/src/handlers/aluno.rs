//! Handlers for the `/alunos` resource.

use alunos_core::error::CoreError;
use alunos_core::types::DbId;
use alunos_db::models::aluno::{Aluno, AlunoInput, UpdateAluno};
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

const ENTITY: &str = "Aluno";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /alunos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Aluno>>> {
    let alunos = state.store.list().await?;
    Ok(Json(alunos))
}

/// POST /alunos
///
/// Nothing is written unless the body passes validation.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AlunoInput>,
) -> AppResult<Json<Aluno>> {
    input.validate()?;

    let aluno = state.store.create(&input).await?;
    tracing::info!(aluno_id = aluno.id(), "Aluno created");
    Ok(Json(aluno))
}

/// GET /alunos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Aluno>> {
    let aluno = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(aluno))
}

/// GET /alunos/cpf/{cpf}
pub async fn find_by_cpf(
    State(state): State<AppState>,
    AppPath(cpf): AppPath<String>,
) -> AppResult<Json<Aluno>> {
    let found = state.store.find_by_cpf(&cpf).await?;
    let aluno = found.ok_or(AppError::Core(CoreError::NotFoundBy {
        entity: ENTITY,
        field: "cpf",
        value: cpf,
    }))?;
    Ok(Json(aluno))
}

/// PUT /alunos/{id}
///
/// Full replacement: the body must carry every field.
pub async fn replace(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AlunoInput>,
) -> AppResult<Json<Aluno>> {
    input.validate()?;

    let aluno = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(aluno_id = id, "Aluno replaced");
    Ok(Json(aluno))
}

/// PATCH /alunos/{id}
///
/// Absent fields keep their stored value; the merged record is validated
/// as a whole before it is saved.
pub async fn patch(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(changes): AppJson<UpdateAluno>,
) -> AppResult<Json<Aluno>> {
    let current = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    let input = changes.merge_onto(&current);
    input.validate()?;

    let aluno = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(aluno_id = id, "Aluno updated");
    Ok(Json(aluno))
}

/// DELETE /alunos/{id}
///
/// Soft delete: the row stays in the table with `deleted_at` set and
/// disappears from every read.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Value>> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(aluno_id = id, "Aluno deleted");
    Ok(Json(json!({ "data": "Aluno deletado com sucesso" })))
}
