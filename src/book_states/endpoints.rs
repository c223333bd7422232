//! Book states module endpoints.

use crate::client::{ApiData, LedgerXClient};
use crate::errors::LedgerXError;


const GET_BOOK_STATE: &str = "/api/book-states/{}";


impl LedgerXClient {

    /// Request the current book state for a contract.
    ///
    /// The snapshot is the aggregated bid/ask state at request time; this
    /// client does not maintain the book afterwards.
    ///
    /// **Endpoint:** `GET /api/book-states/{id}`
    ///
    /// # Returns
    /// The current book state as decoded JSON
    pub async fn get_book_state(&self, contract_id: u64) -> Result<ApiData, LedgerXError> {
        let path = GET_BOOK_STATE.replace("{}", &contract_id.to_string());
        self.authenticated_get(&self.trade_url(&path)).await
    }
}
