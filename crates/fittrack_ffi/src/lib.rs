//! Flutter-facing bindings for `fittrack_core`.

pub mod api;
