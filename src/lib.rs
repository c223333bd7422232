//! LedgerX Rust SDK
//!
//! Unofficial Rust SDK for the LedgerX (FTX US Derivatives) trading API.
//! Provides authentication, contract and quote retrieval, position data, and
//! order entry for crypto options, futures and swaps.
//!
//! # Quick Start
//!
//! ```no_run
//! use ledgerx_rs::{Credentials, LedgerXClient};
//! use ledgerx_rs::contracts::models::ContractsQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Hold your JWT token from the LedgerX web interface
//! let credentials = Credentials::new("your-jwt-token".to_string());
//!
//! // 2. Create a client
//! let client = LedgerXClient::new(credentials);
//!
//! // 3. Use the client to call API endpoints
//! let contracts = client.get_contracts(&ContractsQuery {
//!     active: Some(true),
//!     derivative_type: Some("future_contract".to_string()),
//!     limit: Some(5),
//!     ..Default::default()
//! }).await?;
//!
//! println!("{contracts}");
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`LedgerXClient`] - Main client with all API endpoint methods
//! - [`Credentials`] - Authentication token
//!
//! # API Endpoint Modules
//!
//! - [`contracts`] - Contract listings, details and tickers
//! - [`positions`] - Positions and position trades
//! - [`orders`] - Order entry, cancellation and amendment
//! - [`book_states`] - Order-book snapshots
//!
//! All endpoint methods are implemented on [`LedgerXClient`]; responses are
//! returned as decoded JSON ([`ApiData`]) rather than typed structs, so the
//! payloads reach the caller exactly as the exchange sent them.


// Core modules
pub mod auth;           // Authentication and credential management
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod book_states;    // Order-book snapshots
pub mod contracts;      // Contract data and tickers
pub mod orders;         // Order entry and management
pub mod positions;      // Position data


// Re-exports for convenient access
pub use auth::Credentials;
pub use client::{ApiData, LedgerXClient};
