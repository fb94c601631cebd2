//! Demo fixtures for dev environments.
//!
//! Mirrors the historical fixture set: two users, four categories split
//! between them, two items per category.

use curio_auth::Actor;
use curio_core::DomainResult;
use curio_store::{CatalogStore, IdentityStore};

use crate::CatalogService;

const PLACEHOLDER_PICTURE: &str = "http://via.placeholder.com/100x100";

/// Load the demo data set.
///
/// A second run fails fast with `DuplicateIdentity` before touching the
/// catalog tables, so it is safe to guard startup with this call.
pub async fn load_demo_data<C, U>(service: &CatalogService<C, U>) -> DomainResult<()>
where
    C: CatalogStore,
    U: IdentityStore,
{
    let user1 = service
        .register_user("User1", "example1@example1.com", PLACEHOLDER_PICTURE)
        .await?;
    let user2 = service
        .register_user("User2", "example2@example2.com", PLACEHOLDER_PICTURE)
        .await?;

    let actor1 = Actor::Authenticated(user1.id);
    let actor2 = Actor::Authenticated(user2.id);

    let assignments = [
        (&actor1, "category1"),
        (&actor1, "category2"),
        (&actor2, "category3"),
        (&actor2, "category4"),
    ];

    let mut item_no = 0;
    for (actor, name) in assignments {
        let category = service.create_category(actor, name).await?;
        for _ in 0..2 {
            item_no += 1;
            service
                .create_item(
                    actor,
                    &format!("item{item_no}"),
                    Some(&format!("description{item_no}")),
                    category.id,
                )
                .await?;
        }
    }

    tracing::info!("demo data loaded: 2 users, 4 categories, 8 items");
    Ok(())
}
