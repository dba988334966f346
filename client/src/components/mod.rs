//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentation only; pages own data fetching and read the
//! auth context.

pub mod loading_screen;
pub mod product_table;
pub mod user_table;
