//! Read projections: serializable views joined from already-loaded entities.
//!
//! Pure, no I/O. The field names are consumed verbatim by external JSON
//! clients and must not change.

use serde::Serialize;

use curio_core::{CategoryId, ItemId};

use crate::{Category, Item, User};

/// External view of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub owner_name: String,
}

impl CategoryView {
    pub fn project(category: &Category, owner: &User) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            owner_name: owner.name.clone(),
        }
    }
}

/// External view of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub category_name: String,
    pub owner_name: String,
}

impl ItemView {
    pub fn project(item: &Item, category: &Category, owner: &User) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            category_name: category.name.clone(),
            owner_name: owner.name.clone(),
        }
    }
}
