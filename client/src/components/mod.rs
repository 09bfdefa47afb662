//! Page region components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static content from `content` and read/write the shared
//! `PageState` signal provided by `pages::home`.

pub mod abstract_card;
pub mod authors;
pub mod citation;
pub mod examples;
pub mod figure;
pub mod hero;
pub mod implementation;
pub mod lightbox;
pub mod methodology;
pub mod results;
