//! `curio-api` — JSON transport over the catalog service.
//!
//! Route plumbing, DTOs with the legacy wire field names, and
//! error-to-status mapping. All business rules live below the service
//! boundary.

pub mod app;
