//! Auth module models.
//!
//! This module contains data structures for auth functionality.

/// Credentials for LedgerX API authentication
///
/// Stores the JWT token issued by the LedgerX web interface; the token is
/// sent on every request as `Authorization: JWT <token>`. How the token is
/// obtained is the exchange's business, not this crate's.
#[derive(Debug, Clone)]


pub struct Credentials {
    jwt_token: String,
}


impl Credentials {
    /// Create new Credentials directly from a token
    ///
    /// # Example
    /// ```no_run
    /// use ledgerx_rs::auth::Credentials;
    ///
    /// let credentials = Credentials::new("your-jwt-token".to_string());
    /// ```
    pub fn new(jwt_token: String) -> Self {
        Self { jwt_token }
    }


    /// Get reference to the JWT token
    pub fn jwt_token(&self) -> &str {
        &self.jwt_token
    }
}
