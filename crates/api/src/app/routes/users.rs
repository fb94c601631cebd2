//! User provisioning route.
//!
//! Called by the session layer after a successful external login to map the
//! verified identity onto an internal user.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app::dto::CreateUserRequest;
use crate::app::errors;
use crate::app::AppState;

pub async fn create(State(state): State<AppState>, Json(req): Json<CreateUserRequest>) -> Response {
    match state
        .service
        .register_user(&req.name, &req.email, &req.picture)
        .await
    {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
