//! `curio-catalog` — catalog domain entities and read projections.
//!
//! Entities validate their fields at construction time; the stores persist
//! them as-is and hand back clones, never shared mutable state.

pub mod category;
pub mod item;
pub mod projection;
pub mod user;
pub mod validate;

pub use category::Category;
pub use item::Item;
pub use projection::{CategoryView, ItemView};
pub use user::User;
