//! Store contracts: identity persistence and catalog persistence.

use std::sync::Arc;

use async_trait::async_trait;

use curio_catalog::{Category, Item, User};
use curio_core::{CategoryId, ItemId, UserId};

use crate::error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence of users, keyed by internal id and unique email.
///
/// Implementations must make `create_user` an atomic uniqueness guard: the
/// email check and the insert are one step, so two racing creations for the
/// same email yield exactly one row and one `DuplicateEmail`.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Exact-match lookup by email.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a user. Fails `DuplicateEmail` if the email is already taken.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    async fn get_user(&self, id: UserId) -> StoreResult<User>;
}

/// Persistence of categories and items.
///
/// Implementations must:
/// - return listings in id-ascending order (UUIDv7 ids, so insertion order)
/// - apply every mutation as one atomic unit (row change plus cascades)
/// - verify `category_id` resolves inside the same atomic unit as an item
///   insert, so a concurrent category delete can never leave an orphan
///
/// Callers are responsible for authorization; the store only enforces
/// referential integrity.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn get_category(&self, id: CategoryId) -> StoreResult<Category>;

    async fn create_category(&self, category: Category) -> StoreResult<Category>;

    /// Rename a category. The name must already be validated.
    async fn rename_category(&self, id: CategoryId, new_name: String) -> StoreResult<Category>;

    /// Delete the category and every item referencing it in one atomic
    /// unit; partial application (category gone, items remaining) is
    /// forbidden. Returns the number of items removed with it.
    async fn delete_category(&self, id: CategoryId) -> StoreResult<u64>;

    async fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Items in a category, empty (not an error) when the category has no
    /// items or does not exist.
    async fn list_items_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Item>>;

    async fn get_item(&self, id: ItemId) -> StoreResult<Item>;

    /// Insert an item. Fails `MissingCategory` when `item.category_id` does
    /// not resolve.
    async fn create_item(&self, item: Item) -> StoreResult<Item>;

    /// Replace an item's name and description. Fields must already be
    /// validated.
    async fn update_item(
        &self,
        id: ItemId,
        new_name: String,
        new_description: Option<String>,
    ) -> StoreResult<Item>;

    async fn delete_item(&self, id: ItemId) -> StoreResult<()>;
}

#[async_trait]
impl<S> IdentityStore for Arc<S>
where
    S: IdentityStore + ?Sized,
{
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        (**self).find_user_by_email(email).await
    }

    async fn create_user(&self, user: User) -> StoreResult<User> {
        (**self).create_user(user).await
    }

    async fn get_user(&self, id: UserId) -> StoreResult<User> {
        (**self).get_user(id).await
    }
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        (**self).list_categories().await
    }

    async fn get_category(&self, id: CategoryId) -> StoreResult<Category> {
        (**self).get_category(id).await
    }

    async fn create_category(&self, category: Category) -> StoreResult<Category> {
        (**self).create_category(category).await
    }

    async fn rename_category(&self, id: CategoryId, new_name: String) -> StoreResult<Category> {
        (**self).rename_category(id, new_name).await
    }

    async fn delete_category(&self, id: CategoryId) -> StoreResult<u64> {
        (**self).delete_category(id).await
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        (**self).list_items().await
    }

    async fn list_items_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Item>> {
        (**self).list_items_by_category(category_id).await
    }

    async fn get_item(&self, id: ItemId) -> StoreResult<Item> {
        (**self).get_item(id).await
    }

    async fn create_item(&self, item: Item) -> StoreResult<Item> {
        (**self).create_item(item).await
    }

    async fn update_item(
        &self,
        id: ItemId,
        new_name: String,
        new_description: Option<String>,
    ) -> StoreResult<Item> {
        (**self).update_item(id, new_name, new_description).await
    }

    async fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        (**self).delete_item(id).await
    }
}
