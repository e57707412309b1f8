//! Core use-case services.
//!
//! # Responsibility
//! - Own the live `AppData` and route every change through the reducer.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod store;
