//! Order-book snapshots.

pub mod endpoints;
