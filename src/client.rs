use crate::auth::Credentials;
use crate::errors::LedgerXError;
use crate::helpers;
use reqwest::Client;


// LedgerX splits its REST surface across two hosts: trading data lives on
// api.ledgerx.com, order entry and book states on trade.ledgerx.com.
const TRADING_API: &str = "https://api.ledgerx.com";
const TRADE_API: &str = "https://trade.ledgerx.com";


/// Decoded `data` member of a LedgerX API response.
///
/// The exchange wraps every payload in a `{"data": ...}` envelope; endpoint
/// methods return the unwrapped member as plain JSON.
pub type ApiData = serde_json::Value;


/// Main client for interacting with the LedgerX API.
///
/// The `LedgerXClient` provides access to all LedgerX API endpoints organized
/// by category. Create a client with [`LedgerXClient::new`] and use the
/// various methods to interact with the API.
///
/// # Available Endpoint Categories
///
/// ## Contracts
/// - [`get_contracts`](LedgerXClient::get_contracts) - Retrieve contract listings
/// - [`get_traded_contracts`](LedgerXClient::get_traded_contracts) - Contracts you have traded
/// - [`get_contract`](LedgerXClient::get_contract) - Get individual contract details
/// - [`get_contract_ticker`](LedgerXClient::get_contract_ticker) - Current quote snapshot
///
/// ## Positions
/// - [`get_positions`](LedgerXClient::get_positions) - Get all positions
/// - [`get_contract_position`](LedgerXClient::get_contract_position) - Position for one contract
/// - [`get_position_trades`](LedgerXClient::get_position_trades) - Trades for a position
///
/// ## Orders
/// - [`get_open_orders`](LedgerXClient::get_open_orders) - Resting limit orders
/// - [`create_order`](LedgerXClient::create_order) - Place a new order
/// - [`cancel_order`](LedgerXClient::cancel_order) - Cancel a single order
/// - [`cancel_all_orders`](LedgerXClient::cancel_all_orders) - Cancel everything
/// - [`amend_order`](LedgerXClient::amend_order) - Cancel and replace
///
/// ## Book states
/// - [`get_book_state`](LedgerXClient::get_book_state) - Order-book snapshot
///
/// # Example
/// ```no_run
/// use ledgerx_rs::{Credentials, LedgerXClient};
/// use ledgerx_rs::contracts::models::ContractsQuery;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("your-jwt-token".to_string());
/// let client = LedgerXClient::new(credentials);
///
/// let contracts = client.get_contracts(&ContractsQuery {
///     limit: Some(10),
///     ..Default::default()
/// }).await?;
/// # Ok(())
/// # }
/// ```
pub struct LedgerXClient {
    pub(crate) http_client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) trading_base_url: String,
    pub(crate) trade_base_url: String,
}


impl LedgerXClient {
    /// Create a new LedgerXClient against the production API endpoints
    pub fn new(credentials: Credentials) -> LedgerXClient {
        LedgerXClient::new_with_config(credentials, None, None)
    }


    /// Create a new LedgerXClient with custom API endpoints
    /// Useful for testing or using different API environments
    pub fn new_with_config(
        credentials: Credentials,
        trading_base_url: Option<String>,
        trade_base_url: Option<String>,
    ) -> LedgerXClient {
        // Redirects are never followed; requests go exactly where they were aimed
        let http_client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");
        LedgerXClient {
            http_client,
            credentials,
            trading_base_url: trading_base_url.unwrap_or_else(|| TRADING_API.to_string()),
            trade_base_url: trade_base_url.unwrap_or_else(|| TRADE_API.to_string()),
        }
    }


    /// Full URL on the trading-data host (contracts, positions)
    pub(crate) fn trading_url(&self, path: &str) -> String {
        format!("{}{}", self.trading_base_url.trim_end_matches('/'), path)
    }


    /// Full URL on the order-entry host (orders, book states)
    pub(crate) fn trade_url(&self, path: &str) -> String {
        format!("{}{}", self.trade_base_url.trim_end_matches('/'), path)
    }


    /// Wrapper for authenticated GET requests
    pub async fn authenticated_get(&self, url: &str) -> Result<ApiData, LedgerXError> {
        helpers::authenticated_get(&self.http_client, &self.credentials, url).await
    }


    /// Wrapper for authenticated POST requests
    pub async fn authenticated_post<T>(
        &self,
        url: &str,
        json_body: Option<&T>,
    ) -> Result<ApiData, LedgerXError>
    where
        T: serde::Serialize + ?Sized,
    {
        helpers::authenticated_post(&self.http_client, &self.credentials, url, json_body).await
    }


    /// Wrapper for authenticated DELETE requests
    ///
    /// Parameters for DELETE endpoints travel in the query string, so the
    /// url is expected to carry them already.
    pub async fn authenticated_delete(&self, url: &str) -> Result<ApiData, LedgerXError> {
        helpers::authenticated_delete(&self.http_client, &self.credentials, url).await
    }
}
