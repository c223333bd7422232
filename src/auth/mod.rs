//! Authentication credentials and environment loading.

pub mod auth_loader;
pub mod models;

pub use models::Credentials;
