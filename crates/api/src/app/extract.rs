//! Actor extraction.
//!
//! The session/identity layer in front of this service resolves the login
//! and forwards the user id in a header; a missing header is an anonymous
//! request, not an error (reads are public).

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

use curio_auth::Actor;
use curio_core::UserId;

use super::errors;

/// Header carrying the session-resolved actor id.
pub const ACTOR_HEADER: &str = "x-user-id";

pub struct SessionActor(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for SessionActor
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts.headers.get(ACTOR_HEADER) else {
            return Ok(SessionActor(Actor::Anonymous));
        };
        let raw = raw.to_str().map_err(|_| {
            errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_actor",
                format!("{ACTOR_HEADER} must be ascii"),
            )
        })?;
        let id: UserId = raw.parse().map_err(|_| {
            errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_actor",
                format!("{ACTOR_HEADER} must be a uuid"),
            )
        })?;
        Ok(SessionActor(Actor::Authenticated(id)))
    }
}
