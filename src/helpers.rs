//! Helper functions for making authenticated HTTP requests.

use crate::auth::Credentials;
use crate::client::ApiData;
use crate::errors::LedgerXError;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use tracing::debug;


/// Authorization header value; LedgerX expects the `JWT` scheme
pub(crate) fn auth_header(credentials: &Credentials) -> String {
    format!("JWT {}", credentials.jwt_token())
}


/// Make an authenticated GET request
pub(crate) async fn authenticated_get(
    http_client: &Client,
    credentials: &Credentials,
    url: &str,
) -> Result<ApiData, LedgerXError> {
    debug!(url, "GET");
    let resp = http_client
        .get(url)
        .header(AUTHORIZATION, auth_header(credentials))
        .send()
        .await?;
    read_api_response(resp).await
}


/// Make an authenticated POST request with an optional JSON body
pub(crate) async fn authenticated_post<T>(
    http_client: &Client,
    credentials: &Credentials,
    url: &str,
    json_body: Option<&T>,
) -> Result<ApiData, LedgerXError>
where
    T: serde::Serialize + ?Sized,
{
    debug!(url, "POST");
    let mut request = http_client
        .post(url)
        .header(AUTHORIZATION, auth_header(credentials));
    if let Some(body) = json_body {
        request = request.json(body);
    }
    let resp = request.send().await?;
    read_api_response(resp).await
}


/// Make an authenticated DELETE request
///
/// DELETE endpoints take their parameters in the query string, so the url
/// already carries everything the exchange needs.
pub(crate) async fn authenticated_delete(
    http_client: &Client,
    credentials: &Credentials,
    url: &str,
) -> Result<ApiData, LedgerXError> {
    debug!(url, "DELETE");
    let resp = http_client
        .delete(url)
        .header(AUTHORIZATION, auth_header(credentials))
        .send()
        .await?;
    read_api_response(resp).await
}


/// Check the status, decode the body and unwrap the response envelope
async fn read_api_response(resp: Response) -> Result<ApiData, LedgerXError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(LedgerXError::StatusError { status, body });
    }
    debug!(status = status.as_u16(), "response");
    // The cancel endpoints answer success with an empty body; report the
    // status code in its place
    if body.trim().is_empty() {
        return Ok(serde_json::json!({ "status": status.as_u16() }));
    }
    let value: serde_json::Value = serde_json::from_str(&body)?;
    Ok(unwrap_data(value))
}


/// Every payload arrives wrapped in a `{"data": ...}` envelope; callers get
/// the member itself
fn unwrap_data(mut value: serde_json::Value) -> ApiData {
    match value.get_mut("data") {
        Some(data) => data.take(),
        None => value,
    }
}
