//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clipboard, window
//! navigation, asset URLs) from component logic so they can be tested
//! without a DOM.

pub mod assets;
pub mod browser;
pub mod clipboard;
