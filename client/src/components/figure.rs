//! Clickable figure thumbnail that opens the lightbox.

use leptos::prelude::*;

use crate::content::Figure;
use crate::state::page::PageState;
use crate::util::assets::{base_path, figure_url};

/// Thumbnail + short label. Clicking opens the lightbox with the long caption.
///
/// With `hide_on_error`, a failed asset load marks the figure broken so the
/// enclosing row drops out of layout.
#[component]
pub fn ZoomableFigure(
    figure: Figure,
    img_class: &'static str,
    #[prop(optional)] hide_on_error: bool,
) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let src = figure_url(&base_path(), figure.file);
    let img_ref = NodeRef::<leptos::html::Img>::new();

    let on_open = {
        let src = src.clone();
        move |_| page.update(|p| p.open_lightbox(src.clone(), figure.caption))
    };

    let mark_broken = move || {
        if hide_on_error {
            #[cfg(feature = "hydrate")]
            log::debug!("figure {} failed to load; hiding its row", figure.file);
            page.update(|p| p.mark_figure_broken(figure.file));
        }
    };

    // A server-rendered <img> can fail before hydration attaches `on:error`.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                mark_broken();
            }
        }
    });

    view! {
        <div class="image-wrapper" on:click=on_open>
            <img
                src=src
                alt=figure.alt
                class=format!("{img_class} zoomable")
                node_ref=img_ref
                on:error=move |_| mark_broken()
            />
            <div class="image-caption">{figure.label}</div>
        </div>
    }
}
