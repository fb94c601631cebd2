//! Ownership check: actor vs resource owner.

use serde::{Deserialize, Serialize};

use curio_core::UserId;

/// The identity attempting an operation.
///
/// Resolved per request by the (external) session layer and passed in
/// explicitly; there is no process-wide session state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// No authenticated identity on the request.
    Anonymous,
    /// A session-resolved user id.
    Authenticated(UserId),
}

impl Actor {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated(id) => Some(*id),
        }
    }
}

/// Outcome of an ownership check.
///
/// `#[must_use]` so a computed decision cannot be silently dropped; the
/// service must branch on it and return early on `Deny` before any store
/// write.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        self == Decision::Allow
    }
}

/// Authorize an actor against a resource owner.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Deny iff the actor is anonymous or its user id differs from `owner`.
pub fn authorize(actor: &Actor, owner: UserId) -> Decision {
    match actor.user_id() {
        Some(id) if id == owner => Decision::Allow,
        _ => Decision::Deny,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_allowed() {
        let owner = UserId::new();
        assert_eq!(authorize(&Actor::Authenticated(owner), owner), Decision::Allow);
    }

    #[test]
    fn different_user_is_denied() {
        let owner = UserId::new();
        let other = UserId::new();
        assert_eq!(authorize(&Actor::Authenticated(other), owner), Decision::Deny);
    }

    #[test]
    fn anonymous_is_denied() {
        assert_eq!(authorize(&Actor::Anonymous, UserId::new()), Decision::Deny);
    }
}
