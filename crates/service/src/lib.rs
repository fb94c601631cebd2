//! `curio-service` — catalog orchestration: CRUD verbs gated by ownership.
//!
//! Composes the stores with the authorization guard. Every mutating verb
//! runs the same shape: load, authorize, mutate; a `Deny` returns before
//! any store write.

pub mod seed;
pub mod service;

pub use service::CatalogService;
