use reqwest::StatusCode;
use std::fmt;
#[derive(Debug)]
pub enum LedgerXError {
    RequestError(reqwest::Error),
    StatusError { status: StatusCode, body: String },
    ParseError(serde_json::Error),
    IoError(std::io::Error),
    Other(String),
}
impl fmt::Display for LedgerXError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerXError::RequestError(e) => write!(f, "Request error: {}", e),
            LedgerXError::StatusError { status, body } => {
                write!(f, "HTTP {}: {}", status, body)
            }
            LedgerXError::ParseError(e) => write!(f, "Parse error: {}", e),
            LedgerXError::IoError(e) => write!(f, "IO error: {}", e),
            LedgerXError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}
impl std::error::Error for LedgerXError {}
impl From<reqwest::Error> for LedgerXError {
    fn from(err: reqwest::Error) -> Self {
        LedgerXError::RequestError(err)
    }
}
impl From<serde_json::Error> for LedgerXError {
    fn from(err: serde_json::Error) -> Self {
        LedgerXError::ParseError(err)
    }
}
impl From<std::io::Error> for LedgerXError {
    fn from(err: std::io::Error) -> Self {
        LedgerXError::IoError(err)
    }
}
impl From<String> for LedgerXError {
    fn from(s: String) -> LedgerXError {
        LedgerXError::Other(s)
    }
}
