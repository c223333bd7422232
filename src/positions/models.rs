//! Positions module models.

use serde::Serialize;


/// Query parameters for `GET /trading/positions`.
#[derive(Serialize, Default)]


pub struct PositionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}
