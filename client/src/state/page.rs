//! Transient UI state for the project page.
//!
//! DESIGN
//! ======
//! Three independent concerns live here: the abstract toggle, the lightbox,
//! and the citation "copied" indicator. A fourth set tracks figures whose
//! asset failed to load so their row can be dropped from layout. The view is
//! a pure projection of this struct; components only call the transition
//! methods below.
//!
//! The copied indicator carries a generation counter. Each successful copy
//! bumps it, and a scheduled reset only applies when it still holds the
//! generation it was armed with, so an older timer can never clear the flag
//! early after a re-copy.

use std::collections::BTreeSet;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Delay before the citation button label reverts from "Copied" to "Copy".
pub const COPY_RESET_MS: u32 = 1500;

/// The image currently shown in the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    pub src: String,
    pub caption: String,
}

impl Lightbox {
    /// Alt text for the enlarged image; falls back when the caption is empty.
    pub fn alt(&self) -> &str {
        if self.caption.is_empty() { "Preview" } else { &self.caption }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    pub abstract_expanded: bool,
    pub lightbox: Option<Lightbox>,
    pub citation_copied: bool,
    pub copy_generation: u64,
    pub broken_figures: BTreeSet<&'static str>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            abstract_expanded: true,
            lightbox: None,
            citation_copied: false,
            copy_generation: 0,
            broken_figures: BTreeSet::new(),
        }
    }
}

impl PageState {
    /// "Read more". One-way: nothing collapses the abstract again.
    pub fn expand_abstract(&mut self) {
        self.abstract_expanded = true;
    }

    /// Show `src` in the overlay, replacing whatever was open. An empty
    /// source closes the overlay instead.
    pub fn open_lightbox(&mut self, src: impl Into<String>, caption: impl Into<String>) {
        let src = src.into();
        if src.is_empty() {
            self.lightbox = None;
            return;
        }
        self.lightbox = Some(Lightbox { src, caption: caption.into() });
    }

    /// Backdrop click or Escape. Closing an already-closed overlay is a no-op.
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox_src(&self) -> &str {
        self.lightbox.as_ref().map_or("", |lb| lb.src.as_str())
    }

    pub fn lightbox_caption(&self) -> &str {
        self.lightbox.as_ref().map_or("", |lb| lb.caption.as_str())
    }

    /// Record a successful clipboard write. Returns the generation the
    /// caller must pass to [`PageState::expire_copied`] when its timer fires.
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_generation = self.copy_generation.wrapping_add(1);
        self.citation_copied = true;
        self.copy_generation
    }

    /// Clear the copied flag if no newer copy happened since `generation`.
    pub fn expire_copied(&mut self, generation: u64) {
        if generation == self.copy_generation {
            self.citation_copied = false;
        }
    }

    /// Fold the outcome of a clipboard write into the state. A failure is
    /// absorbed and leaves the state untouched; success returns the
    /// generation to hand to the reset timer.
    pub fn apply_copy_result(&mut self, result: &Result<(), String>) -> Option<u64> {
        match result {
            Ok(()) => Some(self.mark_copied()),
            Err(_) => None,
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.citation_copied { "Copied" } else { "Copy" }
    }

    /// Drop the figure identified by `file` from layout.
    pub fn mark_figure_broken(&mut self, file: &'static str) {
        self.broken_figures.insert(file);
    }

    pub fn is_figure_visible(&self, file: &str) -> bool {
        !self.broken_figures.contains(file)
    }
}

/// Inline style for a figure row: absent while visible, so rendered rows
/// carry no `style` attribute until an asset fails.
pub fn hidden_style(visible: bool) -> Option<&'static str> {
    if visible { None } else { Some("display: none") }
}
