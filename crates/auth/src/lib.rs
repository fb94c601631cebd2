//! `curio-auth` — ownership authorization guard.
//!
//! The single enforcement point for mutations: every mutating service
//! operation asks this crate for a decision before touching the store.

pub mod guard;

pub use guard::{authorize, Actor, Decision};
