//! Results charts grid and headline findings.

use leptos::prelude::*;

use crate::components::figure::ZoomableFigure;
use crate::content::{RESULT_BULLETS, RESULTS};
use crate::state::page::{PageState, hidden_style};

#[component]
pub fn ResultsSection() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <div class="section results-section">
            <h2 class="section-title">"Results"</h2>
            <div class="results-grid">
                {RESULTS
                    .iter()
                    .map(|chart| {
                        let file = chart.file;
                        view! {
                            <div
                                class="result-card"
                                style=move || hidden_style(page.with(|p| p.is_figure_visible(file)))
                            >
                                <ZoomableFigure figure=chart.figure() img_class="result-img" hide_on_error=true/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="results-bullets">
                <ul>
                    {RESULT_BULLETS
                        .iter()
                        .map(|bullet| {
                            view! {
                                <li>
                                    <strong>{bullet.heading}</strong>
                                    " "
                                    {bullet.text}
                                    {bullet.note.map(|note| {
                                        view! {
                                            <br/>
                                            <span class="results-note">{note}</span>
                                        }
                                    })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
