//! User entity: the internal identity a verified external login maps to.

use serde::{Deserialize, Serialize};

use curio_core::{DomainError, DomainResult, UserId};

use crate::validate;

/// A registered user.
///
/// Created on first successful external authentication, never updated in
/// place and never deleted by end-user action. The email is the external
/// identity key and uniquely identifies at most one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub picture: String,
}

impl User {
    /// Build a user from profile attributes handed back by the identity
    /// provider. Assigns a fresh id.
    pub fn new(name: &str, email: &str, picture: &str) -> DomainResult<Self> {
        let name = validate::require_name("user name", name)?;
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email must be a valid address"));
        }
        Ok(Self {
            id: UserId::new(),
            name,
            email: email.to_string(),
            picture: picture.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_keeps_profile_attributes() {
        let user = User::new("Ada", "ada@example.com", "http://example.com/p.png").unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.picture, "http://example.com/p.png");
    }

    #[test]
    fn new_user_rejects_bad_email() {
        let err = User::new("Ada", "not-an-email", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_user_rejects_blank_name() {
        let err = User::new("  ", "ada@example.com", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
