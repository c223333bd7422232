//! Contracts module endpoints.
//!
//! This module implements API endpoints for retrieving contract data from
//! LedgerX, including contract lists, individual contract details and
//! ticker snapshots.
//!
//! # Usage
//!
//! All endpoint methods are available on
//! [`LedgerXClient`](crate::client::LedgerXClient). See the client
//! documentation for a complete list of available methods.

use crate::client::{ApiData, LedgerXClient};
use crate::contracts::models::{ContractsQuery, TickerQuery, TradedContractsQuery};
use crate::errors::LedgerXError;

const GET_CONTRACTS: &str = "/trading/contracts";
const GET_TRADED_CONTRACTS: &str = "/trading/contracts/traded";
const GET_CONTRACT: &str = "/trading/contracts/{}";
const GET_CONTRACT_TICKER: &str = "/trading/contracts/{}/ticker";

impl LedgerXClient {
    /// Retrieves a list of contracts from LedgerX.
    ///
    /// **Endpoint:** `GET /trading/contracts`
    ///
    /// # Query Parameters
    /// - `active` - true for active contracts only, false for all contracts
    /// - `contract_type` - Filter by contract type (Call, Put)
    /// - `derivative_type` - Filter by derivative type (options_contract,
    ///   day_ahead_swap, future_contract)
    /// - `asset` - Filter by asset (USD, ETH, CBTC)
    /// - `before_ts` - Filter for records created before datetime (UTC)
    /// - `after_ts` - Filter for records created after datetime (UTC)
    /// - `limit` - The maximum number of results to return
    /// - `offset` - The initial index from which to return the results
    ///
    /// # Returns
    /// The list of contracts as decoded JSON
    ///
    /// # Models Used
    /// - Query: [`ContractsQuery`]
    pub async fn get_contracts(
        &self,
        params: &ContractsQuery,
    ) -> Result<ApiData, LedgerXError> {
        // Only append '?' if there are actual query params to avoid malformed URLs
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| LedgerXError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let path = if query.is_empty() {
            GET_CONTRACTS.to_string()
        } else {
            format!("{}?{}", GET_CONTRACTS, query)
        };
        self.authenticated_get(&self.trading_url(&path)).await
    }


    /// Retrieves the list of contracts that you have traded.
    ///
    /// **Endpoint:** `GET /trading/contracts/traded`
    ///
    /// # Query Parameters
    /// - `derivative_type` - Filter by derivative type
    /// - `asset` - Filter by asset
    /// - `limit` - The maximum number of results to return
    /// - `offset` - The initial index from which to return the results
    ///
    /// # Returns
    /// The list of contracts traded as decoded JSON
    ///
    /// # Models Used
    /// - Query: [`TradedContractsQuery`]
    pub async fn get_traded_contracts(
        &self,
        params: &TradedContractsQuery,
    ) -> Result<ApiData, LedgerXError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| LedgerXError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let path = if query.is_empty() {
            GET_TRADED_CONTRACTS.to_string()
        } else {
            format!("{}?{}", GET_TRADED_CONTRACTS, query)
        };
        self.authenticated_get(&self.trading_url(&path)).await
    }


    /// Retrieves detailed information for a single contract.
    ///
    /// **Endpoint:** `GET /trading/contracts/{id}`
    ///
    /// # Parameters
    /// - `contract_id` - The numeric contract identifier
    ///
    /// # Returns
    /// Contract details as decoded JSON
    pub async fn get_contract(&self, contract_id: u64) -> Result<ApiData, LedgerXError> {
        let path = GET_CONTRACT.replace("{}", &contract_id.to_string());
        self.authenticated_get(&self.trading_url(&path)).await
    }


    /// Snapshot information about the current best bid/ask, 24h volume and
    /// last trade for a contract. All prices are in cents.
    ///
    /// The exchange rate-limits this endpoint heavily; poll sparingly.
    ///
    /// **Endpoint:** `GET /trading/contracts/{id}/ticker`
    ///
    /// # Parameters
    /// - `contract_id` - The numeric contract identifier
    ///
    /// # Query Parameters
    /// - `time` - Snapshot at a specific time; defaults to now
    /// - `asset` - Asset for day-ahead swap tickers (USD, ETH, CBTC)
    ///
    /// # Returns
    /// Ticker information as decoded JSON
    ///
    /// # Models Used
    /// - Query: [`TickerQuery`]
    pub async fn get_contract_ticker(
        &self,
        contract_id: u64,
        params: &TickerQuery,
    ) -> Result<ApiData, LedgerXError> {
        let base_path = GET_CONTRACT_TICKER.replace("{}", &contract_id.to_string());
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| LedgerXError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let path = if query.is_empty() {
            base_path
        } else {
            format!("{}?{}", base_path, query)
        };
        self.authenticated_get(&self.trading_url(&path)).await
    }
}
