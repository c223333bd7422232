//! Orders module models.
//!
//! Request and query structures for order entry. The client performs no
//! validation of its own; invalid combinations are rejected by the exchange.

use derive_more::Display;
use serde::Serialize;


/// Body for `POST /api/orders`.
///
/// - `is_ask` - Order side. true to sell; false to buy
/// - `order_type` - Only "limit" is accepted by the exchange
/// - `price` - The limit price in cents (USD) per contract
/// - `volatile` - true to auto-cancel the order at 4PM; false to rest until
///   filled
/// - `swap_purpose` - bf_hedge for bona-fide hedge; non_bf_hedge; undisclosed
#[derive(Debug, Clone, Serialize, Display)]
#[display("order: contract={} is_ask={} size={} price={}c", contract_id, is_ask, size, price)]
pub struct CreateOrderRequest {
    pub contract_id: u64,
    pub is_ask: bool,
    pub order_type: String,
    pub size: u64,
    pub price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_purpose: Option<String>,
}


/// Query parameters for `DELETE /api/orders/{mid}`.
#[derive(Serialize)]
pub struct CancelOrderQuery {
    pub contract_id: u64,
}


/// Query parameters for `DELETE /api/orders/{mid}/edit`.
#[derive(Serialize)]
pub struct AmendOrderQuery {
    pub contract_id: u64,
    pub price: u64,
    pub size: u64,
}
