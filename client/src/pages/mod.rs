//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the only routed page; it picks between `login` and `dashboard`
//! from the auth context and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
