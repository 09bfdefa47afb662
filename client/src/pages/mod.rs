//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it owns page-scoped state and delegates
//! rendering details to `components`.

pub mod home;
