//! State transitions and derived queries over `AppData`.
//!
//! # Responsibility
//! - Define every state change as one `Action` value.
//! - Apply actions through a pure, total reducer.
//! - Answer read-only questions ("today's workout", weight trend) on demand.
//!
//! # Invariants
//! - `reduce` never fails and never performs I/O.
//! - Unknown actions and updates/deletes of missing ids are no-ops.
//! - Queries recompute on every call; nothing is cached.

pub mod action;
pub mod query;
pub mod reducer;
