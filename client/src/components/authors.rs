//! Author list under the hero title.

use leptos::prelude::*;

use crate::content::{AUTHORS, Author};

fn author_name(author: &Author) -> AnyView {
    match author.url {
        Some(url) => view! {
            <a href=url style="color: inherit" target="_blank" rel="noopener noreferrer">
                {author.name}
            </a>
        }
        .into_any(),
        None => author.name.into_any(),
    }
}

#[component]
pub fn AuthorList() -> impl IntoView {
    view! {
        <div class="authors-list">
            {AUTHORS
                .iter()
                .map(|author| {
                    view! {
                        <div class="author">
                            <div class="author-name">{author_name(author)}</div>
                            <div class="author-institution">{author.institution}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
