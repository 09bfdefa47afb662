//! BibTeX block with a copy-to-clipboard button.

use leptos::prelude::*;

use crate::content::CITATION_BIBTEX;
use crate::state::page::PageState;

/// The button label follows `PageState::citation_copied`; the clipboard
/// write and reset timer belong to the caller behind `on_copy`.
#[component]
pub fn CitationBlock(on_copy: Callback<()>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <div class="section citation-section">
            <h2 class="section-title">"Citation"</h2>
            <div class="code-block">
                <button class="copy-btn" on:click=move |_| on_copy.run(())>
                    {move || page.with(PageState::copy_label)}
                </button>
                <pre>
                    <code>{CITATION_BIBTEX}</code>
                </pre>
            </div>
        </div>
    }
}
