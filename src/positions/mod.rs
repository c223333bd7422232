//! Positions and position trades.

pub mod endpoints;
pub mod models;
