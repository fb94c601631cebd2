//! Request and response DTOs.
//!
//! The envelope field names (`Categories`, `Category`, `Items`, `Item`) are
//! consumed verbatim by existing JSON clients and must match exactly.

use serde::{Deserialize, Serialize};

use curio_catalog::{CategoryView, ItemView};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: String,
}

// -------------------------
// Response envelopes
// -------------------------

#[derive(Debug, Serialize)]
pub struct CategoriesEnvelope {
    #[serde(rename = "Categories")]
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub struct CategoryEnvelope {
    #[serde(rename = "Category")]
    pub category: CategoryView,
}

#[derive(Debug, Serialize)]
pub struct ItemsEnvelope {
    #[serde(rename = "Items")]
    pub items: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    #[serde(rename = "Item")]
    pub item: ItemView,
}

#[derive(Debug, Serialize)]
pub struct CategoryDeletedResponse {
    pub deleted: bool,
    pub items_removed: u64,
}

#[derive(Debug, Serialize)]
pub struct ItemDeletedResponse {
    pub deleted: bool,
}
