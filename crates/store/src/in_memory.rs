//! In-memory store over a single table set.
//!
//! Intended for tests/dev. A single `RwLock` over all three tables
//! serializes mutations, so a cascade delete can never interleave with an
//! item insert and every mutating operation is atomic as observed by
//! readers.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use curio_catalog::{Category, Item, User};
use curio_core::{CategoryId, ItemId, UserId};

use crate::error::StoreError;
use crate::traits::{CatalogStore, IdentityStore, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    categories: HashMap<CategoryId, Category>,
    items: HashMap<ItemId, Item>,
}

/// In-memory identity + catalog store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

#[async_trait]
impl IdentityStore for InMemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.read()?;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut tables = self.write()?;
        // uniqueness check and insert under one write lock
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> StoreResult<User> {
        let tables = self.read()?;
        tables.users.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.read()?;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get_category(&self, id: CategoryId) -> StoreResult<Category> {
        let tables = self.read()?;
        tables.categories.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create_category(&self, category: Category) -> StoreResult<Category> {
        let mut tables = self.write()?;
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn rename_category(&self, id: CategoryId, new_name: String) -> StoreResult<Category> {
        let mut tables = self.write()?;
        let category = tables.categories.get_mut(&id).ok_or(StoreError::NotFound)?;
        category.name = new_name;
        Ok(category.clone())
    }

    async fn delete_category(&self, id: CategoryId) -> StoreResult<u64> {
        let mut tables = self.write()?;
        if tables.categories.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        let before = tables.items.len();
        tables.items.retain(|_, item| item.category_id != id);
        Ok((before - tables.items.len()) as u64)
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let tables = self.read()?;
        let mut items: Vec<Item> = tables.items.values().cloned().collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn list_items_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Item>> {
        let tables = self.read()?;
        let mut items: Vec<Item> = tables
            .items
            .values()
            .filter(|i| i.category_id == category_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn get_item(&self, id: ItemId) -> StoreResult<Item> {
        let tables = self.read()?;
        tables.items.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create_item(&self, item: Item) -> StoreResult<Item> {
        let mut tables = self.write()?;
        // referential check and insert under one write lock
        if !tables.categories.contains_key(&item.category_id) {
            return Err(StoreError::MissingCategory(item.category_id));
        }
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update_item(
        &self,
        id: ItemId,
        new_name: String,
        new_description: Option<String>,
    ) -> StoreResult<Item> {
        let mut tables = self.write()?;
        let item = tables.items.get_mut(&id).ok_or(StoreError::NotFound)?;
        item.name = new_name;
        item.description = new_description;
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        let mut tables = self.write()?;
        match tables.items.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User::new(name, email, "http://example.com/p.png").unwrap()
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_email() {
        let store = InMemoryStore::new();
        store.create_user(user("Ada", "ada@example.com")).await.unwrap();

        let err = store
            .create_user(user("Imposter", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));

        // exactly one row exists for that email
        let found = store.find_user_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(found.name, "Ada");
    }

    #[tokio::test]
    async fn delete_category_cascades_to_items() {
        let store = InMemoryStore::new();
        let owner = store.create_user(user("Ada", "ada@example.com")).await.unwrap();
        let books = store
            .create_category(Category::new("Books", owner.id).unwrap())
            .await
            .unwrap();
        let maps = store
            .create_category(Category::new("Maps", owner.id).unwrap())
            .await
            .unwrap();

        let atlas = store
            .create_item(Item::new("Atlas", None, books.id, owner.id).unwrap())
            .await
            .unwrap();
        let globe = store
            .create_item(Item::new("Globe", None, maps.id, owner.id).unwrap())
            .await
            .unwrap();

        let removed = store.delete_category(books.id).await.unwrap();
        assert_eq!(removed, 1);

        assert!(matches!(store.get_item(atlas.id).await, Err(StoreError::NotFound)));
        // unrelated items survive
        assert_eq!(store.get_item(globe.id).await.unwrap().id, globe.id);
        let remaining = store.list_items().await.unwrap();
        assert!(remaining.iter().all(|i| i.category_id != books.id));
    }

    #[tokio::test]
    async fn create_item_requires_existing_category() {
        let store = InMemoryStore::new();
        let owner = store.create_user(user("Ada", "ada@example.com")).await.unwrap();

        let err = store
            .create_item(Item::new("Orphan", None, CategoryId::new(), owner.id).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingCategory(_)));
        assert!(store.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listings_come_back_in_id_order() {
        let store = InMemoryStore::new();
        let owner = store.create_user(user("Ada", "ada@example.com")).await.unwrap();
        let mut created = Vec::new();
        for name in ["c1", "c2", "c3"] {
            created.push(store.create_category(Category::new(name, owner.id).unwrap()).await.unwrap());
        }
        created.sort_by_key(|c| c.id);

        let listed = store.list_categories().await.unwrap();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn items_by_unknown_category_is_empty_not_error() {
        let store = InMemoryStore::new();
        let items = store.list_items_by_category(CategoryId::new()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn round_trip_category() {
        let store = InMemoryStore::new();
        let owner = store.create_user(user("Ada", "ada@example.com")).await.unwrap();
        let created = store
            .create_category(Category::new("X", owner.id).unwrap())
            .await
            .unwrap();
        let loaded = store.get_category(created.id).await.unwrap();
        assert_eq!(loaded, created);
    }
}
