use ledgerx_rs::orders::models::CreateOrderRequest;
use serde_json::json;

#[test]
fn test_create_order_serializes_fields_verbatim() {
    let request = CreateOrderRequest {
        contract_id: 123123,
        is_ask: true,
        order_type: "limit".to_string(),
        size: 1,
        price: 12300,
        volatile: None,
        swap_purpose: None,
    };
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"contract_id":123123,"is_ask":true,"order_type":"limit","size":1,"price":12300}"#
    );
}

#[test]
fn test_optional_order_fields_are_included_when_set() {
    let request = CreateOrderRequest {
        contract_id: 123123,
        is_ask: false,
        order_type: "limit".to_string(),
        size: 3,
        price: 500,
        volatile: Some(true),
        swap_purpose: Some("bf_hedge".to_string()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["volatile"], json!(true));
    assert_eq!(value["swap_purpose"], json!("bf_hedge"));
}

#[test]
fn test_order_display_is_log_friendly() {
    let request = CreateOrderRequest {
        contract_id: 123123,
        is_ask: true,
        order_type: "limit".to_string(),
        size: 1,
        price: 12300,
        volatile: None,
        swap_purpose: None,
    };
    assert_eq!(
        request.to_string(),
        "order: contract=123123 is_ask=true size=1 price=12300c"
    );
}
