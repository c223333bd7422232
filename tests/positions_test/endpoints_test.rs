use crate::common::setup_client;
use ledgerx_rs::positions::models::PositionsQuery;

#[tokio::test]
async fn test_get_positions_with_pagination() {
    let (client, state) = setup_client().await;
    let result = client
        .get_positions(&PositionsQuery {
            limit: Some(25),
            offset: Some(50),
        })
        .await;
    assert!(result.is_ok(), "Failed to get positions: {:?}", result.err());
    let request = state.last_request().await;
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/trading/positions");
    assert_eq!(request.query.get("limit").map(String::as_str), Some("25"));
    assert_eq!(request.query.get("offset").map(String::as_str), Some("50"));
}

#[tokio::test]
async fn test_get_contract_position() {
    let (client, state) = setup_client().await;
    let position = client.get_contract_position(22230828).await.unwrap();
    let request = state.last_request().await;
    assert_eq!(request.path, "/trading/contracts/22230828/position");
    assert!(request.query.is_empty());
    assert_eq!(position["size"], 2);
}

#[tokio::test]
async fn test_get_position_trades() {
    let (client, state) = setup_client().await;
    let trades = client.get_position_trades(22230828).await.unwrap();
    let request = state.last_request().await;
    assert_eq!(request.path, "/trading/positions/22230828/trades");
    assert!(trades.is_array());
}
