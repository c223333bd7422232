//! Positions module endpoints.
//!
//! This module implements API endpoints for position data.

use crate::client::{ApiData, LedgerXClient};
use crate::errors::LedgerXError;
use crate::positions::models::PositionsQuery;


const GET_POSITIONS: &str = "/trading/positions";
const GET_CONTRACT_POSITION: &str = "/trading/contracts/{}/position";
const GET_POSITION_TRADES: &str = "/trading/positions/{}/trades";


impl LedgerXClient {

    /// Get all your positions.
    ///
    /// **Endpoint:** `GET /trading/positions`
    ///
    /// # Query Parameters
    /// - `limit` - The maximum number of results to return
    /// - `offset` - The initial index from which to return the results
    ///
    /// # Returns
    /// The list of positions as decoded JSON
    pub async fn get_positions(
        &self,
        params: &PositionsQuery,
    ) -> Result<ApiData, LedgerXError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| LedgerXError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let path = if query.is_empty() {
            GET_POSITIONS.to_string()
        } else {
            format!("{}?{}", GET_POSITIONS, query)
        };
        self.authenticated_get(&self.trading_url(&path)).await
    }


    /// Get your position for a single contract.
    ///
    /// **Endpoint:** `GET /trading/contracts/{id}/position`
    ///
    /// # Returns
    /// Position details as decoded JSON
    pub async fn get_contract_position(
        &self,
        contract_id: u64,
    ) -> Result<ApiData, LedgerXError> {
        let path = GET_CONTRACT_POSITION.replace("{}", &contract_id.to_string());
        self.authenticated_get(&self.trading_url(&path)).await
    }


    /// Get your trades for a given position.
    ///
    /// **Endpoint:** `GET /trading/positions/{id}/trades`
    ///
    /// # Returns
    /// The list of trades as decoded JSON
    pub async fn get_position_trades(
        &self,
        contract_id: u64,
    ) -> Result<ApiData, LedgerXError> {
        let path = GET_POSITION_TRADES.replace("{}", &contract_id.to_string());
        self.authenticated_get(&self.trading_url(&path)).await
    }
}
