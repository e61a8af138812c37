//! Page Tab Bar Component
//!
//! Tab bar for switching between the two list pages. Leaving a page drops
//! all of its local state.

use leptos::prelude::*;

use crate::context::{NavContext, Page};

const TABS: &[(Page, &str)] = &[(Page::Quotes, "Quotes"), (Page::ShowList, "Show List")];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");

    view! {
        <nav class="page-tab-bar">
            {TABS
                .iter()
                .map(|&(page, label)| {
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "page-tab active" } else { "page-tab" }
                            on:click=move |_| ctx.goto(page)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
            <button class="page-tab logout" on:click=move |_| ctx.goto(Page::Login)>
                "Log out"
            </button>
        </nav>
    }
}
