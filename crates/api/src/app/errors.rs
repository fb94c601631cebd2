//! Error-to-status mapping for the JSON layer.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use curio_auth::Actor;
use curio_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Unauthorized => {
            json_error(StatusCode::FORBIDDEN, "unauthorized", "unauthorized")
        }
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::DuplicateIdentity(email) => json_error(
            StatusCode::CONFLICT,
            "duplicate_identity",
            format!("email already registered: {email}"),
        ),
        DomainError::StoreUnavailable(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", msg)
        }
    }
}

/// Like [`domain_error_to_response`], but distinguishes a missing session
/// (401) from an actor that is not the owner (403).
pub fn mutation_error(actor: &Actor, err: DomainError) -> axum::response::Response {
    if err == DomainError::Unauthorized && actor.user_id().is_none() {
        return json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "authentication required",
        );
    }
    domain_error_to_response(err)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
