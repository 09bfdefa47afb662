//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The page has a single owner of transient UI state (`page`); components
//! read it from context and mutate it through its transition methods.

pub mod page;
