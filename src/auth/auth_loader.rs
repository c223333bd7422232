use crate::auth::models::Credentials;
use std::env;
use std::io;


// Environment variable name for authentication
const LEDGERX_JWT: &str = "LEDGERX_JWT";


/// Load authentication credentials from the environment
///
/// Reads a `.env` file if one is present, then expects:
/// - LEDGERX_JWT: your JWT token from the LedgerX web interface
///
/// Returns a Credentials struct with the token loaded
pub fn load_auth_from_env() -> io::Result<Credentials> {
    dotenv::dotenv().ok();
    let jwt_token = env::var(LEDGERX_JWT).map_err(|_| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "LEDGERX_JWT environment variable not set",
        )
    })?;
    Ok(Credentials::new(jwt_token))
}
