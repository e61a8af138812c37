//! Show List Page Component
//!
//! The second list page: same pipeline as the Quotes page over a different
//! record type, card layout, no add/vote actions.

use leptos::prelude::*;

use crate::components::{BarChart, NavBar, SearchSortBar};
use crate::models::seed_entries;
use crate::pipeline::{self, SortOrder};

#[component]
pub fn ShowListPage() -> impl IntoView {
    let (items, set_items) = signal(seed_entries());
    let (query, set_query) = signal(String::new());
    let (order, set_order) = signal(SortOrder::Ascending);
    let (page, set_page) = signal(1u32);
    let (loading, set_loading) = signal(false);

    let visible = Memo::new(move |_| {
        pipeline::sort(&pipeline::filter(&items.get(), &query.get()), order.get())
    });
    let chart = Signal::derive(move || pipeline::project_for_chart(&visible.get()));

    let load_more = move |_| {
        set_loading.set(true);
        web_sys::console::log_1(&format!("[LIST] appending page {}", page.get()).into());
        set_items.update(|is| *is = pipeline::append_page(is, &seed_entries(), page.get()));
        set_page.update(|p| *p += 1);
        set_loading.set(false);
    };

    view! {
        <div class="page">
            <NavBar />
            <h1>"Show List"</h1>

            <SearchSortBar
                query=query
                set_query=set_query
                order=order
                set_order=set_order
                placeholder="Search..."
            />

            <BarChart data=chart />

            <div class="card-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="card">
                                    <h2>{item.title.clone()}</h2>
                                    <p class="votes">"Votes: " {item.votes}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}
            <button class="primary" on:click=load_more disabled=move || loading.get()>
                "Load More"
            </button>
        </div>
    }
}
