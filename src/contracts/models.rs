//! Contracts module models.
//!
//! Query parameter structures for the contract endpoints. Filters are passed
//! through to the exchange as given; nothing is validated locally.

use chrono::{DateTime, Utc};
use serde::Serialize;


/// Query parameters for `GET /trading/contracts`.
///
/// All fields are optional filters for contract retrieval.
#[derive(Serialize, Default)]


pub struct ContractsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_ts: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_ts: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}


/// Query parameters for `GET /trading/contracts/traded`.
#[derive(Serialize, Default)]


pub struct TradedContractsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}


/// Query parameters for `GET /trading/contracts/{id}/ticker`.
#[derive(Serialize, Default)]


pub struct TickerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}
