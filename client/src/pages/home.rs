//! Project page: the single route of the site.
//!
//! ARCHITECTURE
//! ============
//! `HomePage` owns the `PageState` signal and provides it to every region
//! component. It also owns the two side-effectful resources of the page: the
//! window-wide Escape listener (released in `on_cleanup`) and the citation
//! reset timer.
//!
//! TRADE-OFFS
//! ==========
//! The reset timer handle is kept in a local `StoredValue`; storing a new
//! `Timeout` drops the previous one, which cancels it. `PageState` also
//! guards resets by copy generation, so even a timer that already fired
//! cannot clear a newer "Copied" label.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::abstract_card::AbstractCard;
use crate::components::authors::AuthorList;
use crate::components::citation::CitationBlock;
use crate::components::examples::ExamplesSection;
use crate::components::hero::{CallsToAction, HeroHeader};
use crate::components::implementation::ImplementationSection;
use crate::components::lightbox::LightboxOverlay;
use crate::components::methodology::MethodologySection;
use crate::components::results::ResultsSection;
use crate::state::page::PageState;

/// Keys that dismiss the lightbox. `Esc` is the legacy Edge/IE spelling.
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let page = RwSignal::new(PageState::default());
    provide_context(page);

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_cancel_key(&ev.key()) {
            page.update(PageState::close_lightbox);
        }
    });
    on_cleanup(move || keydown.remove());

    #[cfg(feature = "hydrate")]
    let reset_timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    let on_copy = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::content::CITATION_BIBTEX;
            use crate::state::page::COPY_RESET_MS;

            let result = crate::util::clipboard::write_text(CITATION_BIBTEX).await;
            if let Err(err) = &result {
                // Copy is a convenience; the BibTeX stays selectable on the page.
                log::debug!("citation copy failed: {err}");
            }
            let Some(Some(generation)) = page.try_update(|p| p.apply_copy_result(&result)) else {
                return;
            };
            let timeout = gloo_timers::callback::Timeout::new(COPY_RESET_MS, move || {
                page.update(|p| p.expire_copied(generation));
            });
            reset_timer.set_value(Some(timeout));
        });
    });

    view! {
        <div class="app">
            <div class="title-block hero">
                <HeroHeader/>
                <AuthorList/>
                <CallsToAction/>
                <AbstractCard/>
                <ExamplesSection/>
                <MethodologySection/>
                <ImplementationSection/>
                <ResultsSection/>
                <CitationBlock on_copy=on_copy/>
            </div>
            <LightboxOverlay/>
        </div>
    }
}
