//! Protected demo listings.

use axum::response::Json;
use serde::Serialize;

use super::auth::AuthUser;
use crate::services::catalog::{self, DirectoryEntry, Product};

#[derive(Debug, Serialize)]
pub struct UserDirectory {
    pub users: &'static [DirectoryEntry],
    pub total: usize,
    pub requested_by: String,
}

#[derive(Debug, Serialize)]
pub struct ProductCatalog {
    pub products: &'static [Product],
    pub total: usize,
    pub requested_by: String,
}

/// `GET /api/users`: List the demo user directory.
pub async fn list_users(auth: AuthUser) -> Json<UserDirectory> {
    let users = catalog::directory();
    Json(UserDirectory { users, total: users.len(), requested_by: auth.user.username })
}

/// `GET /api/products`: List the demo product catalog.
pub async fn list_products(auth: AuthUser) -> Json<ProductCatalog> {
    let products = catalog::products();
    Json(ProductCatalog { products, total: products.len(), requested_by: auth.user.username })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
