//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep async session plumbing and formatting out of page
//! components so they stay testable without a browser.

pub mod auth;
pub mod format;
