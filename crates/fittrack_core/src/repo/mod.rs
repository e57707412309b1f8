//! Persistence adapter for the single `AppData` document.
//!
//! # Responsibility
//! - Store and fetch one serialized blob per fixed key.
//! - Decode and validate stored documents before anyone trusts them.
//!
//! # Invariants
//! - Writes always carry a complete document; there are no partial writes.
//! - A stored blob that fails parsing or validation is reported as
//!   malformed and never handed out partially typed.

pub mod blob_repo;
pub mod document;
