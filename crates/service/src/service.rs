//! The catalog service: store access behind the ownership guard.

use tracing::{info, warn};

use curio_auth::{authorize, Actor, Decision};
use curio_catalog::{validate, Category, CategoryView, Item, ItemView, User};
use curio_core::{CategoryId, DomainError, DomainResult, ItemId, UserId};
use curio_store::{CatalogStore, IdentityStore, StoreError};

/// Catalog orchestration over an identity store and a catalog store.
///
/// Reads are public. Creates require an authenticated actor that resolves
/// to a provisioned user. Updates and deletes load the resource, consume the
/// guard's [`Decision`] in an explicit branch, and only then mutate; the
/// store re-validates existence inside the mutating call, so a concurrent
/// delete surfaces as `NotFound` rather than a partial write.
#[derive(Debug, Clone)]
pub struct CatalogService<C, U> {
    catalog: C,
    identity: U,
}

impl<C, U> CatalogService<C, U>
where
    C: CatalogStore,
    U: IdentityStore,
{
    pub fn new(catalog: C, identity: U) -> Self {
        Self { catalog, identity }
    }

    // ---- identity -------------------------------------------------------

    /// Provision a user on first successful external authentication.
    ///
    /// Atomic uniqueness guard: a second registration for the same email
    /// fails `DuplicateIdentity` and leaves exactly one row.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        picture: &str,
    ) -> DomainResult<User> {
        let user = User::new(name, email, picture)?;
        let user = self.identity.create_user(user).await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    pub async fn user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self.identity.find_user_by_email(email).await?)
    }

    pub async fn user(&self, id: UserId) -> DomainResult<User> {
        Ok(self.identity.get_user(id).await?)
    }

    // ---- guard helpers --------------------------------------------------

    /// Resolve the actor to a provisioned user id, or `Unauthorized`.
    async fn require_registered_actor(&self, actor: &Actor) -> DomainResult<UserId> {
        let Some(id) = actor.user_id() else {
            return Err(DomainError::Unauthorized);
        };
        match self.identity.get_user(id).await {
            Ok(user) => Ok(user.id),
            Err(StoreError::NotFound) => Err(DomainError::Unauthorized),
            Err(err) => Err(err.into()),
        }
    }

    /// Branch on the guard's decision; `Deny` short-circuits the caller
    /// before any store write.
    fn check_owner(actor: &Actor, owner: UserId, resource: &str) -> DomainResult<()> {
        match authorize(actor, owner) {
            Decision::Allow => Ok(()),
            Decision::Deny => {
                warn!(resource, "mutation denied: actor is not the owner");
                Err(DomainError::Unauthorized)
            }
        }
    }

    // ---- categories -----------------------------------------------------

    pub async fn create_category(&self, actor: &Actor, name: &str) -> DomainResult<Category> {
        let owner_id = self.require_registered_actor(actor).await?;
        let category = Category::new(name, owner_id)?;
        let category = self.catalog.create_category(category).await?;
        info!(category_id = %category.id, "category created");
        Ok(category)
    }

    pub async fn rename_category(
        &self,
        actor: &Actor,
        id: CategoryId,
        new_name: &str,
    ) -> DomainResult<Category> {
        let new_name = validate::require_name("category name", new_name)?;
        let category = self.catalog.get_category(id).await?;
        Self::check_owner(actor, category.owner_id, "category")?;
        Ok(self.catalog.rename_category(id, new_name).await?)
    }

    /// Delete a category and, atomically, every item in it. Returns the
    /// number of cascaded items.
    pub async fn delete_category(&self, actor: &Actor, id: CategoryId) -> DomainResult<u64> {
        let category = self.catalog.get_category(id).await?;
        Self::check_owner(actor, category.owner_id, "category")?;
        let removed = self.catalog.delete_category(id).await?;
        info!(category_id = %id, items_removed = removed, "category deleted");
        Ok(removed)
    }

    // ---- items ----------------------------------------------------------

    pub async fn create_item(
        &self,
        actor: &Actor,
        name: &str,
        description: Option<&str>,
        category_id: CategoryId,
    ) -> DomainResult<Item> {
        let owner_id = self.require_registered_actor(actor).await?;
        let item = Item::new(name, description, category_id, owner_id)?;
        let item = self.catalog.create_item(item).await?;
        info!(item_id = %item.id, category_id = %category_id, "item created");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        actor: &Actor,
        id: ItemId,
        new_name: &str,
        new_description: Option<&str>,
    ) -> DomainResult<Item> {
        let new_name = validate::require_name("item name", new_name)?;
        let new_description = validate::optional_description(new_description)?;
        let item = self.catalog.get_item(id).await?;
        Self::check_owner(actor, item.owner_id, "item")?;
        Ok(self.catalog.update_item(id, new_name, new_description).await?)
    }

    pub async fn delete_item(&self, actor: &Actor, id: ItemId) -> DomainResult<()> {
        let item = self.catalog.get_item(id).await?;
        Self::check_owner(actor, item.owner_id, "item")?;
        self.catalog.delete_item(id).await?;
        info!(item_id = %id, "item deleted");
        Ok(())
    }

    // ---- projections ----------------------------------------------------

    pub async fn categories(&self) -> DomainResult<Vec<CategoryView>> {
        let categories = self.catalog.list_categories().await?;
        let mut views = Vec::with_capacity(categories.len());
        for category in &categories {
            views.push(self.category_view(category).await?);
        }
        Ok(views)
    }

    pub async fn category(&self, id: CategoryId) -> DomainResult<CategoryView> {
        let category = self.catalog.get_category(id).await?;
        self.category_view(&category).await
    }

    pub async fn items(&self) -> DomainResult<Vec<ItemView>> {
        let items = self.catalog.list_items().await?;
        let mut views = Vec::with_capacity(items.len());
        for item in &items {
            views.push(self.item_view(item).await?);
        }
        Ok(views)
    }

    /// Item views for one category; empty (not an error) when the category
    /// has no items or does not exist.
    pub async fn items_in_category(&self, category_id: CategoryId) -> DomainResult<Vec<ItemView>> {
        let items = self.catalog.list_items_by_category(category_id).await?;
        let mut views = Vec::with_capacity(items.len());
        for item in &items {
            views.push(self.item_view(item).await?);
        }
        Ok(views)
    }

    pub async fn item(&self, id: ItemId) -> DomainResult<ItemView> {
        let item = self.catalog.get_item(id).await?;
        self.item_view(&item).await
    }

    /// Item view addressed through its category; `NotFound` when the item
    /// exists but under a different category.
    pub async fn item_in_category(
        &self,
        category_id: CategoryId,
        id: ItemId,
    ) -> DomainResult<ItemView> {
        let item = self.catalog.get_item(id).await?;
        if item.category_id != category_id {
            return Err(DomainError::NotFound);
        }
        self.item_view(&item).await
    }

    async fn category_view(&self, category: &Category) -> DomainResult<CategoryView> {
        let owner = self.identity.get_user(category.owner_id).await?;
        Ok(CategoryView::project(category, &owner))
    }

    async fn item_view(&self, item: &Item) -> DomainResult<ItemView> {
        let category = self.catalog.get_category(item.category_id).await?;
        let owner = self.identity.get_user(item.owner_id).await?;
        Ok(ItemView::project(item, &category, &owner))
    }
}
