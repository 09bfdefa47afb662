//! Implementation overview figure and model-ensemble description.

use leptos::prelude::*;

use crate::components::figure::ZoomableFigure;
use crate::content::{IMPLEMENTATION, IMPLEMENTATION_TEXT};
use crate::state::page::{PageState, hidden_style};

#[component]
pub fn ImplementationSection() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let visible = move || page.with(|p| p.is_figure_visible(IMPLEMENTATION.file));

    view! {
        <div class="section how-section">
            <h2 class="section-title">"Implementation"</h2>
            <div class="how-figure" style=move || hidden_style(visible())>
                <ZoomableFigure figure=IMPLEMENTATION img_class="how-img" hide_on_error=true/>
                <p class="how-description">{IMPLEMENTATION_TEXT}</p>
            </div>
        </div>
    }
}
