//! Category entity: a named grouping of items with a single owner.

use serde::{Deserialize, Serialize};

use curio_core::{CategoryId, DomainResult, UserId};

use crate::validate;

/// A catalog category.
///
/// # Invariants
/// - `name` is non-blank and at most [`validate::MAX_NAME_LEN`] characters.
/// - `owner_id` references an existing user; only that user may rename or
///   delete the category.
/// - Deleting a category cascades to every item referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub owner_id: UserId,
}

impl Category {
    /// Create a category owned by `owner_id`, assigning a fresh id.
    pub fn new(name: &str, owner_id: UserId) -> DomainResult<Self> {
        Ok(Self {
            id: CategoryId::new(),
            name: validate::require_name("category name", name)?,
            owner_id,
        })
    }

    /// Rename in place. Ownership must already have been authorized.
    pub fn rename(&mut self, new_name: &str) -> DomainResult<()> {
        self.name = validate::require_name("category name", new_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_core::DomainError;

    #[test]
    fn new_category_assigns_owner() {
        let owner = UserId::new();
        let category = Category::new("Books", owner).unwrap();
        assert_eq!(category.name, "Books");
        assert_eq!(category.owner_id, owner);
    }

    #[test]
    fn rename_replaces_name() {
        let mut category = Category::new("Books", UserId::new()).unwrap();
        category.rename("Maps").unwrap();
        assert_eq!(category.name, "Maps");
    }

    #[test]
    fn rename_rejects_blank_and_keeps_old_name() {
        let mut category = Category::new("Books", UserId::new()).unwrap();
        let err = category.rename("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(category.name, "Books");
    }
}
