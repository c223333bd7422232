//! Orders module endpoints.
//!
//! This module implements API endpoints for order entry and management.
//! These endpoints live on the order-entry host.

use crate::client::{ApiData, LedgerXClient};
use crate::errors::LedgerXError;
use crate::orders::models::{AmendOrderQuery, CancelOrderQuery, CreateOrderRequest};


const GET_OPEN_ORDERS: &str = "/api/open-orders";
const CREATE_ORDER: &str = "/api/orders";
const CANCEL_ALL_ORDERS: &str = "/api/orders";
const CANCEL_ORDER: &str = "/api/orders/{}";
const AMEND_ORDER: &str = "/api/orders/{}/edit";


impl LedgerXClient {

    /// Get all resting limit orders directly from the exchange.
    ///
    /// **Endpoint:** `GET /api/open-orders`
    ///
    /// # Returns
    /// The list of your open orders as decoded JSON
    pub async fn get_open_orders(&self) -> Result<ApiData, LedgerXError> {
        self.authenticated_get(&self.trade_url(GET_OPEN_ORDERS)).await
    }


    /// Place an order.
    ///
    /// The response carries the message id, or mid, of the order; later
    /// fills or cancels for this order reference the same mid.
    ///
    /// **Endpoint:** `POST /api/orders`
    ///
    /// # Returns
    /// Order confirmation as decoded JSON
    ///
    /// # Models Used
    /// - Body: [`CreateOrderRequest`]
    pub async fn create_order(
        &self,
        body: &CreateOrderRequest,
    ) -> Result<ApiData, LedgerXError> {
        self.authenticated_post(&self.trade_url(CREATE_ORDER), Some(body)).await
    }


    /// Delete all outstanding orders associated with your MPID (the whole
    /// organization).
    ///
    /// **Endpoint:** `DELETE /api/orders`
    ///
    /// # Returns
    /// Result with response data or error
    pub async fn cancel_all_orders(&self) -> Result<ApiData, LedgerXError> {
        self.authenticated_delete(&self.trade_url(CANCEL_ALL_ORDERS)).await
    }


    /// Cancel a single resting limit order.
    ///
    /// **Endpoint:** `DELETE /api/orders/{mid}`
    ///
    /// # Parameters
    /// - `mid` - The message id (mid) of the original order
    /// - `contract_id` - The contract ID of the original order
    ///
    /// # Returns
    /// Result with response data or error
    pub async fn cancel_order(
        &self,
        mid: &str,
        contract_id: u64,
    ) -> Result<ApiData, LedgerXError> {
        let params = CancelOrderQuery { contract_id };
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| LedgerXError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let path = format!("{}?{}", CANCEL_ORDER.replace("{}", mid), query);
        self.authenticated_delete(&self.trade_url(&path)).await
    }


    /// Cancel and replace order.
    ///
    /// Atomically swaps an existing resting limit order for a new resting
    /// limit order; price and size may be changed.
    ///
    /// **Endpoint:** `DELETE /api/orders/{mid}/edit`
    ///
    /// # Parameters
    /// - `mid` - The message id (mid) of the original order
    ///
    /// # Returns
    /// Result with response data or error
    ///
    /// # Models Used
    /// - Query: [`AmendOrderQuery`]
    pub async fn amend_order(
        &self,
        mid: &str,
        params: &AmendOrderQuery,
    ) -> Result<ApiData, LedgerXError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| LedgerXError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let path = format!("{}?{}", AMEND_ORDER.replace("{}", mid), query);
        self.authenticated_delete(&self.trade_url(&path)).await
    }
}
