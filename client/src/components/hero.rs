//! Hero region: teaser figure, title block, and call-to-action buttons.

use leptos::prelude::*;

use crate::components::figure::ZoomableFigure;
use crate::content::{DEMO_URL, PAPER_SUBTITLE, PAPER_TITLE, PAPER_URL, TEASER};
use crate::util::browser::open_in_new_context;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <div class="teaser-container">
            <ZoomableFigure figure=TEASER img_class="teaser-img"/>
        </div>
        <div class="hero-header">
            <h1 class="hero-title">{PAPER_TITLE}</h1>
            <p class="hero-subtitle">{PAPER_SUBTITLE}</p>
        </div>
    }
}

/// "Read Paper" / "Watch Demo". Both open in a new browsing context.
#[component]
pub fn CallsToAction() -> impl IntoView {
    view! {
        <div class="cta-group">
            <button class="btn btn-secondary" on:click=move |_| open_in_new_context(PAPER_URL)>
                "Read Paper"
            </button>
            <button class="btn btn-secondary" on:click=move |_| open_in_new_context(DEMO_URL)>
                "Watch Demo"
            </button>
        </div>
    }
}
