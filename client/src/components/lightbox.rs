//! Fullscreen overlay showing one enlarged figure.

use leptos::prelude::*;

use crate::state::page::PageState;

/// Rendered only while a lightbox is open. Any click on the overlay closes it.
#[component]
pub fn LightboxOverlay() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let close = move |_| page.update(PageState::close_lightbox);
    let src = move || page.with(|p| p.lightbox_src().to_owned());
    let alt = move || page.with(|p| p.lightbox.as_ref().map_or_else(String::new, |lb| lb.alt().to_owned()));
    let caption = move || page.with(|p| p.lightbox_caption().to_owned());

    view! {
        <Show when=move || page.with(|p| p.lightbox.is_some())>
            <div class="lightbox" on:click=close>
                <div class="lightbox-content">
                    <img src=src alt=alt/>
                    <Show when=move || page.with(|p| !p.lightbox_caption().is_empty())>
                        <div class="lightbox-caption">{caption}</div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
