//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON responses field for field so serde
//! round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body returned by `/auth/login` and `/auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

/// An authenticated user as returned by the `/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// One row of the demo user directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u32,
    pub username: String,
    pub email: String,
}

/// Response of `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    pub users: Vec<DirectoryUser>,
    pub total: usize,
    /// Username of the caller, echoed by the server.
    pub requested_by: String,
}

/// One row of the demo product catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Response of `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
    pub total: usize,
    pub requested_by: String,
}

/// Error body returned by every failing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
