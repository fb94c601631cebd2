//! Postgres-backed store implementation.
//!
//! Persists users, categories and items with referential integrity enforced
//! at the database level. Every mutating operation is one transaction (or a
//! single statement, which is equivalent), so cascades cannot be observed
//! half-applied.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `StoreError` as follows:
//!
//! | SQLx error | SQLSTATE | StoreError | Scenario |
//! |------------|----------|------------|----------|
//! | Database (unique violation) | `23505` | `DuplicateEmail` | email already registered |
//! | Database (FK violation) | `23503` | `MissingCategory` | item insert against a deleted category |
//! | RowNotFound | N/A | `NotFound` | id does not resolve |
//! | other | any | `Unavailable` | connectivity, pool closed, transaction failure |

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use curio_catalog::{Category, Item, User};
use curio_core::{CategoryId, ItemId, UserId};

use crate::error::StoreError;
use crate::traits::{CatalogStore, IdentityStore, StoreResult};

use async_trait::async_trait;

/// Schema bootstrap, applied idempotently at startup.
///
/// `ON DELETE CASCADE` on `items.category_id` is the database-level backstop
/// for the cascade the store also performs explicitly.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    picture TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS categories (
    id UUID PRIMARY KEY,
    name VARCHAR(250) NOT NULL,
    owner_id UUID NOT NULL REFERENCES users (id)
);

CREATE TABLE IF NOT EXISTS items (
    id UUID PRIMARY KEY,
    name VARCHAR(250) NOT NULL,
    description VARCHAR(1000),
    category_id UUID NOT NULL REFERENCES categories (id) ON DELETE CASCADE,
    owner_id UUID NOT NULL REFERENCES users (id)
);
"#;

// Manual FromRow impls: the sqlx derive lives behind the `macros` feature,
// which is off.

struct UserRow(User);

impl<'r> sqlx::FromRow<'r, PgRow> for UserRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: Uuid = row.try_get("id")?;
        Ok(Self(User {
            id: UserId::from(id),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            picture: row.try_get("picture")?,
        }))
    }
}

struct CategoryRow(Category);

impl<'r> sqlx::FromRow<'r, PgRow> for CategoryRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: Uuid = row.try_get("id")?;
        let owner_id: Uuid = row.try_get("owner_id")?;
        Ok(Self(Category {
            id: CategoryId::from(id),
            name: row.try_get("name")?,
            owner_id: UserId::from(owner_id),
        }))
    }
}

struct ItemRow(Item);

impl<'r> sqlx::FromRow<'r, PgRow> for ItemRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: Uuid = row.try_get("id")?;
        let category_id: Uuid = row.try_get("category_id")?;
        let owner_id: Uuid = row.try_get("owner_id")?;
        Ok(Self(Item {
            id: ItemId::from(id),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category_id: CategoryId::from(category_id),
            owner_id: UserId::from(owner_id),
        }))
    }
}

/// Postgres-backed identity + catalog store.
///
/// `Send + Sync`; all operations go through the SQLx connection pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database behind `database_url`.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url).await.map_err(map_sqlx)?;
        Ok(Self::new(pool))
    }

    /// Apply the schema if it is not present yet.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

fn map_sqlx(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        other => StoreError::Unavailable(other.to_string()),
    }
}

#[async_trait]
impl IdentityStore for PostgresStore {
    #[instrument(skip(self), err)]
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, picture FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(|r| r.0))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id), err)]
    async fn create_user(&self, user: User) -> StoreResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (id, name, email, picture) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::from(user.id))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.picture)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            // 23505: unique_violation on the email index
            Err(err) if sqlstate(&err).as_deref() == Some("23505") => {
                Err(StoreError::DuplicateEmail(user.email))
            }
            Err(err) => Err(map_sqlx(err)),
        }
    }

    #[instrument(skip(self), fields(user_id = %id), err)]
    async fn get_user(&self, id: UserId) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, picture FROM users WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(|r| r.0).ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl CatalogStore for PostgresStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, owner_id FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn get_category(&self, id: CategoryId) -> StoreResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, owner_id FROM categories WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(|r| r.0).ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self, category), fields(category_id = %category.id), err)]
    async fn create_category(&self, category: Category) -> StoreResult<Category> {
        sqlx::query("INSERT INTO categories (id, name, owner_id) VALUES ($1, $2, $3)")
            .bind(Uuid::from(category.id))
            .bind(&category.name)
            .bind(Uuid::from(category.owner_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(category)
    }

    #[instrument(skip(self, new_name), fields(category_id = %id), err)]
    async fn rename_category(&self, id: CategoryId, new_name: String) -> StoreResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = $2 WHERE id = $1 RETURNING id, name, owner_id",
        )
        .bind(Uuid::from(id))
        .bind(&new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(|r| r.0).ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self), fields(category_id = %id), err)]
    async fn delete_category(&self, id: CategoryId) -> StoreResult<u64> {
        // explicit cascade inside one transaction; the FK's ON DELETE
        // CASCADE would cover the category delete alone, but deleting the
        // items first lets us report how many went with it
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed = sqlx::query("DELETE FROM items WHERE category_id = $1")
            .bind(Uuid::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if deleted == 0 {
            // dropping the uncommitted transaction rolls the item deletes back
            return Err(StoreError::NotFound);
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(removed)
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, category_id, owner_id FROM items ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn list_items_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, category_id, owner_id FROM items \
             WHERE category_id = $1 ORDER BY id ASC",
        )
        .bind(Uuid::from(category_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn get_item(&self, id: ItemId) -> StoreResult<Item> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, category_id, owner_id FROM items WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(|r| r.0).ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id), err)]
    async fn create_item(&self, item: Item) -> StoreResult<Item> {
        let result = sqlx::query(
            "INSERT INTO items (id, name, description, category_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::from(item.id))
        .bind(&item.name)
        .bind(item.description.as_deref())
        .bind(Uuid::from(item.category_id))
        .bind(Uuid::from(item.owner_id))
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(item),
            // 23503: foreign_key_violation — the category vanished, the
            // insert never landed
            Err(err) if sqlstate(&err).as_deref() == Some("23503") => {
                Err(StoreError::MissingCategory(item.category_id))
            }
            Err(err) => Err(map_sqlx(err)),
        }
    }

    #[instrument(skip(self, new_name, new_description), fields(item_id = %id), err)]
    async fn update_item(
        &self,
        id: ItemId,
        new_name: String,
        new_description: Option<String>,
    ) -> StoreResult<Item> {
        let row = sqlx::query_as::<_, ItemRow>(
            "UPDATE items SET name = $2, description = $3 WHERE id = $1 \
             RETURNING id, name, description, category_id, owner_id",
        )
        .bind(Uuid::from(id))
        .bind(&new_name)
        .bind(new_description.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(|r| r.0).ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self), fields(item_id = %id), err)]
    async fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        let deleted = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?
            .rows_affected();
        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
