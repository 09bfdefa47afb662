//! Abstract paragraph with a one-way "Read more" expander.

use leptos::prelude::*;

use crate::content::{ABSTRACT_INTRO, ABSTRACT_REST};
use crate::state::page::PageState;

#[component]
pub fn AbstractCard() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let expanded = move || page.with(|p| p.abstract_expanded);

    let read_more = move || {
        view! {
            <a
                href="#read-more"
                class="read-more-link"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    page.update(PageState::expand_abstract);
                }
            >
                "Read more"
            </a>
        }
    };

    view! {
        <div class="abstract-card">
            <p>
                {ABSTRACT_INTRO}
                <Show when=expanded fallback=read_more>
                    {ABSTRACT_REST}
                </Show>
            </p>
        </div>
    }
}
