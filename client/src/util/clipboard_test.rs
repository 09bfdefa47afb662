#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::page::PageState;

#[test]
fn write_text_fails_outside_the_browser() {
    let result = futures::executor::block_on(write_text("@article{x}"));
    assert_eq!(result, Err("clipboard is only available in the browser".to_owned()));
}

#[test]
fn failed_write_is_absorbed_by_page_state() {
    let mut state = PageState::default();
    let before = state.clone();
    let result = futures::executor::block_on(write_text("@article{x}"));
    assert_eq!(state.apply_copy_result(&result), None);
    assert_eq!(state, before);
}
