//! In-memory state owners.
//!
//! # Responsibility
//! - Hold the session state (items, categories, collector name).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - State lives in explicit objects owned by the composing application.
//! - Service layer remains storage-agnostic.

pub mod category_registry;
pub mod collector;
pub mod item_store;
