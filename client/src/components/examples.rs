//! Gallery of privacy-risk examples, one row per risk.

use leptos::prelude::*;

use crate::components::figure::ZoomableFigure;
use crate::content::EXAMPLES;
use crate::state::page::{PageState, hidden_style};

#[component]
pub fn ExamplesSection() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <div class="section risks-section">
            <h2 class="section-title">"Examples"</h2>
            {EXAMPLES
                .iter()
                .map(|example| {
                    let file = example.file;
                    view! {
                        <div
                            class="risk-row"
                            style=move || hidden_style(page.with(|p| p.is_figure_visible(file)))
                        >
                            <div class="risk-title">{example.title}</div>
                            <div class="risk-figure">
                                <ZoomableFigure figure=example.figure() img_class="risk-img" hide_on_error=true/>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
