pub mod aluno;
pub mod greeting;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                    service + store health
/// /{name}                    greeting
///
/// /alunos                    list, create
/// /alunos/cpf/{cpf}          find by CPF
/// /alunos/{id}               get, replace (PUT), patch, delete
/// ```
///
/// Static segments take precedence over the `/{name}` capture, so `/health`
/// and `/alunos` never reach the greeting handler.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(greeting::router())
        .nest("/alunos", aluno::router())
}
