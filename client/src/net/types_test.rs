use super::*;

#[test]
fn token_response_parses_server_body() {
    let json = r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "abc.def.ghi");
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn user_directory_parses_server_body() {
    let json = r#"{
        "users": [
            {"id": 1, "username": "alice", "email": "alice@example.com"},
            {"id": 2, "username": "bob", "email": "bob@example.com"}
        ],
        "total": 2,
        "requested_by": "testuser"
    }"#;
    let directory: UserDirectory = serde_json::from_str(json).unwrap();
    assert_eq!(directory.total, 2);
    assert_eq!(directory.users[1].username, "bob");
    assert_eq!(directory.requested_by, "testuser");
}

#[test]
fn product_catalog_parses_fractional_prices() {
    let json = r#"{
        "products": [{"id": 1, "name": "Laptop", "price": 999.99, "category": "Electronics"}],
        "total": 1,
        "requested_by": "testuser"
    }"#;
    let catalog: ProductCatalog = serde_json::from_str(json).unwrap();
    assert!((catalog.products[0].price - 999.99).abs() < f64::EPSILON);
    assert_eq!(catalog.products[0].category, "Electronics");
}

#[test]
fn error_detail_parses_fastapi_style_body() {
    let detail: ErrorDetail = serde_json::from_str(r#"{"detail":"Refresh token missing"}"#).unwrap();
    assert_eq!(detail.detail, "Refresh token missing");
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User =
        serde_json::from_str(r#"{"username":"testuser","email":"test@example.com","extra":true}"#).unwrap();
    assert_eq!(user, User { username: "testuser".to_owned(), email: "test@example.com".to_owned() });
}
