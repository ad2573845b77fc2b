//! Domain model for the collection catalog.
//!
//! # Responsibility
//! - Define the canonical item record owned by the item store.
//! - Provide caller-side validation for item input.
//!
//! # Invariants
//! - Every item carries a positive `ItemId` assigned by the store.
//! - Item ids are never changed after creation.

pub mod item;
