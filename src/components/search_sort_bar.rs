//! Search / Sort Bar Component
//!
//! Shared query input and sort toggle for the list pages. Writes straight
//! into the owning page's view signals.

use leptos::prelude::*;

use crate::pipeline::SortOrder;

#[component]
pub fn SearchSortBar(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    order: ReadSignal<SortOrder>,
    set_order: WriteSignal<SortOrder>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-sort-bar">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="sort-btn"
                on:click=move |_| set_order.update(|o| *o = o.toggle())
            >
                {move || format!("Sort: {}", order.get().label())}
            </button>
        </div>
    }
}
