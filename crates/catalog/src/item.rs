//! Item entity: a catalog entry attached to exactly one category.

use serde::{Deserialize, Serialize};

use curio_core::{CategoryId, DomainResult, ItemId, UserId};

use crate::validate;

/// A catalog item.
///
/// # Invariants
/// - `name` is non-blank and at most [`validate::MAX_NAME_LEN`] characters;
///   `description` at most [`validate::MAX_DESCRIPTION_LEN`].
/// - `category_id` references an existing category at all times (the store
///   cascades on category delete rather than orphaning).
/// - `owner_id` is tracked independently of the parent category's owner;
///   typical flows set both from the same actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub owner_id: UserId,
}

impl Item {
    /// Create an item in `category_id` owned by `owner_id`, assigning a
    /// fresh id. The store verifies the category resolves on insert.
    pub fn new(
        name: &str,
        description: Option<&str>,
        category_id: CategoryId,
        owner_id: UserId,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: ItemId::new(),
            name: validate::require_name("item name", name)?,
            description: validate::optional_description(description)?,
            category_id,
            owner_id,
        })
    }

    /// Replace name and description. Ownership must already have been
    /// authorized.
    pub fn update(&mut self, new_name: &str, new_description: Option<&str>) -> DomainResult<()> {
        let name = validate::require_name("item name", new_name)?;
        let description = validate::optional_description(new_description)?;
        self.name = name;
        self.description = description;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_core::DomainError;

    #[test]
    fn new_item_keeps_category_and_owner() {
        let category_id = CategoryId::new();
        let owner_id = UserId::new();
        let item = Item::new("Pen", Some("blue ink"), category_id, owner_id).unwrap();
        assert_eq!(item.category_id, category_id);
        assert_eq!(item.owner_id, owner_id);
        assert_eq!(item.description.as_deref(), Some("blue ink"));
    }

    #[test]
    fn update_rejects_oversized_description_atomically() {
        let mut item = Item::new("Pen", None, CategoryId::new(), UserId::new()).unwrap();
        let long = "d".repeat(validate::MAX_DESCRIPTION_LEN + 1);
        let err = item.update("Pencil", Some(&long)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        // neither field changed
        assert_eq!(item.name, "Pen");
        assert_eq!(item.description, None);
    }

    #[test]
    fn update_replaces_both_fields() {
        let mut item = Item::new("Pen", Some("blue"), CategoryId::new(), UserId::new()).unwrap();
        item.update("Pencil", None).unwrap();
        assert_eq!(item.name, "Pencil");
        assert_eq!(item.description, None);
    }
}
