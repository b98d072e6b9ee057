//! Route definitions for the `/alunos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::aluno;
use crate::state::AppState;

/// Routes mounted at `/alunos`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /cpf/{cpf}     -> find_by_cpf
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> replace
/// PATCH  /{id}          -> patch
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(aluno::list).post(aluno::create))
        .route("/cpf/{cpf}", get(aluno::find_by_cpf))
        .route(
            "/{id}",
            get(aluno::get_by_id)
                .put(aluno::replace)
                .patch(aluno::patch)
                .delete(aluno::delete),
        )
}
