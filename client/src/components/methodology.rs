//! Methodology figure and the three-phase process summary.

use leptos::prelude::*;

use crate::components::figure::ZoomableFigure;
use crate::content::{METHODOLOGY, METHODOLOGY_TEXT};

#[component]
pub fn MethodologySection() -> impl IntoView {
    view! {
        <div class="section methodology-section">
            <h2 class="section-title">"Methodology"</h2>
            <div class="methodology-figure">
                <ZoomableFigure figure=METHODOLOGY img_class="methodology-img"/>
            </div>
            <p>{METHODOLOGY_TEXT}</p>
        </div>
    }
}
