//! Static demo listings served to authenticated callers.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub id: u32,
    pub username: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: f64,
    pub category: &'static str,
}

static DIRECTORY: [DirectoryEntry; 3] = [
    DirectoryEntry { id: 1, username: "alice", email: "alice@example.com" },
    DirectoryEntry { id: 2, username: "bob", email: "bob@example.com" },
    DirectoryEntry { id: 3, username: "charlie", email: "charlie@example.com" },
];

static PRODUCTS: [Product; 3] = [
    Product { id: 1, name: "Laptop", price: 999.99, category: "Electronics" },
    Product { id: 2, name: "Coffee Mug", price: 15.99, category: "Kitchen" },
    Product { id: 3, name: "Book", price: 24.99, category: "Books" },
];

#[must_use]
pub fn directory() -> &'static [DirectoryEntry] {
    &DIRECTORY
}

#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}
