//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks and token handling so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod catalog;
pub mod password;
pub mod token;
pub mod users;
