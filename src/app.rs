//! Quoteboard App
//!
//! Top-level component: global style injection and page switching.

use leptos::prelude::*;

use crate::components::{LoginPage, QuotePage, ShowListPage};
use crate::context::{NavContext, Page};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Everything starts behind the demo login gate
    let (page, set_page) = signal(Page::Login);

    // Provide navigation to all children
    provide_context(NavContext::new((page, set_page)));

    view! {
        <style>{theme::GLOBAL_CSS}</style>
        {move || match page.get() {
            Page::Login => view! { <LoginPage /> }.into_any(),
            Page::Quotes => view! { <QuotePage /> }.into_any(),
            Page::ShowList => view! { <ShowListPage /> }.into_any(),
        }}
    }
}
