// Simple API tests that can run without a database
// Tests the request/response models at the JSON level

#[test]
fn test_create_item_deserialization() {
    use items_service::CreateItem;

    // Full payload
    let json = r#"{"name":"Widget","description":"A widget","price":100,"quantity":3}"#;
    let req: CreateItem = serde_json::from_str(json).unwrap();
    assert_eq!(req.name, "Widget");
    assert_eq!(req.description.as_deref(), Some("A widget"));
    assert_eq!(req.price, 100);
    assert_eq!(req.quantity, 3);

    // Description is optional
    let json = r#"{"name":"Widget","price":100,"quantity":3}"#;
    let req: CreateItem = serde_json::from_str(json).unwrap();
    assert!(req.description.is_none());

    // A client-supplied id is simply ignored
    let json = r#"{"id":42,"name":"Widget","price":100,"quantity":3}"#;
    let req: CreateItem = serde_json::from_str(json).unwrap();
    assert_eq!(req.name, "Widget");
}

#[test]
fn test_create_item_requires_name_price_and_quantity() {
    use items_service::CreateItem;

    // Each required field missing in turn
    assert!(serde_json::from_str::<CreateItem>(r#"{"price":100,"quantity":3}"#).is_err());
    assert!(serde_json::from_str::<CreateItem>(r#"{"name":"Widget","quantity":3}"#).is_err());
    assert!(serde_json::from_str::<CreateItem>(r#"{"name":"Widget","price":100}"#).is_err());
}

#[test]
fn test_item_patch_deserialization() {
    use items_service::ItemPatch;

    // A single field
    let patch: ItemPatch = serde_json::from_str(r#"{"price":20}"#).unwrap();
    assert_eq!(patch.price, Some(20));
    assert!(patch.name.is_none());
    assert!(patch.description.is_none());
    assert!(patch.quantity.is_none());

    // The empty patch
    let patch: ItemPatch = serde_json::from_str("{}").unwrap();
    assert!(patch.name.is_none());
    assert!(patch.description.is_none());
    assert!(patch.price.is_none());
    assert!(patch.quantity.is_none());
}

#[test]
fn test_item_serialization_shape() {
    use items_service::Item;

    let item = Item {
        id: 1,
        name: "Widget".to_string(),
        description: None,
        price: 100,
        quantity: 3,
    };

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "Widget");
    assert!(value["description"].is_null());
    assert_eq!(value["price"], 100);
    assert_eq!(value["quantity"], 3);
}

#[test]
fn test_detail_serialization() {
    use items_service::Detail;

    let value = serde_json::to_value(Detail::new("Item not found")).unwrap();
    assert_eq!(value, serde_json::json!({"detail": "Item not found"}));
}
