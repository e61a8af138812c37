//! Quotes Page Component
//!
//! The main list page: add, random pick, vote, search, sort, load more, and
//! the vote chart. All state is local to the component and recomputed
//! synchronously on every action.

use leptos::prelude::*;

use crate::components::{BarChart, NavBar, SearchSortBar, VoteButton};
use crate::models::{seed_quotes, Quote};
use crate::pipeline::{self, SortOrder};

#[component]
pub fn QuotePage() -> impl IntoView {
    let (quotes, set_quotes) = signal(seed_quotes());
    let (new_text, set_new_text) = signal(String::new());
    let (random_pick, set_random_pick) = signal::<Option<Quote>>(None);
    let (query, set_query) = signal(String::new());
    let (order, set_order) = signal(SortOrder::Ascending);
    let (page, set_page) = signal(1u32);
    let (loading, set_loading) = signal(false);

    // Derived view: search filter then sort, recomputed before every paint
    let visible = Memo::new(move |_| {
        pipeline::sort(&pipeline::filter(&quotes.get(), &query.get()), order.get())
    });
    let chart = Signal::derive(move || pipeline::project_for_chart(&visible.get()));

    let add_quote = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_quotes.update(|qs| {
            let quote = Quote::new(pipeline::next_id(qs), text, 0);
            qs.push(quote);
        });
        set_new_text.set(String::new());
    };

    let pick_random = move |_| {
        let qs = quotes.get();
        let idx = (js_sys::Math::random() * qs.len() as f64) as usize;
        set_random_pick.set(qs.get(idx).cloned());
    };

    let cast_vote = Callback::new(move |id: u32| {
        set_quotes.update(|qs| *qs = pipeline::vote(qs, id));
        // Keep the random card's count in step with the list
        set_random_pick.update(|pick| {
            if let Some(p) = pick {
                if p.id == id {
                    p.votes += 1;
                }
            }
        });
    });

    // No I/O behind this: the flag exists purely for display
    let load_more = move |_| {
        set_loading.set(true);
        web_sys::console::log_1(&format!("[QUOTES] appending page {}", page.get()).into());
        set_quotes.update(|qs| *qs = pipeline::append_page(qs, &seed_quotes(), page.get()));
        set_page.update(|p| *p += 1);
        set_loading.set(false);
    };

    view! {
        <div class="page">
            <NavBar />
            <h1>"Quotes"</h1>

            <div class="random-row">
                <button class="primary" on:click=pick_random>
                    "Get Random Quote"
                </button>
            </div>

            {move || {
                random_pick
                    .get()
                    .map(|quote| {
                        view! {
                            <div class="random-card">
                                <p>{quote.text.clone()}</p>
                                <p class="votes">"Votes: " {quote.votes}</p>
                                <VoteButton id=quote.id on_vote=cast_vote />
                            </div>
                        }
                    })
            }}

            <h2>"Add a New Quote"</h2>
            <form class="add-form" on:submit=add_quote>
                <input
                    type="text"
                    placeholder="Enter your quote"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="primary">
                    "Add Quote"
                </button>
            </form>

            <SearchSortBar
                query=query
                set_query=set_query
                order=order
                set_order=set_order
                placeholder="Search quotes..."
            />

            <BarChart data=chart />

            <h2>"All Quotes"</h2>
            <ul class="quote-list">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|quote| {
                            view! {
                                <li class="quote-row">
                                    <p>{quote.text.clone()}</p>
                                    <p class="votes">"Votes: " {quote.votes}</p>
                                    <VoteButton id=quote.id on_vote=cast_vote />
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}
            <button class="primary" on:click=load_more disabled=move || loading.get()>
                "Load More"
            </button>

            <p class="item-count">{move || format!("{} quotes", quotes.get().len())}</p>
        </div>
    }
}
