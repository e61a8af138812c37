//! Vote Button Component
//!
//! Reusable button casting one vote for a record.

use leptos::prelude::*;

/// Button that casts one vote for the record with `id`
#[component]
pub fn VoteButton(id: u32, #[prop(into)] on_vote: Callback<u32>) -> impl IntoView {
    view! {
        <button class="vote-btn" on:click=move |_| on_vote.run(id)>
            "Vote"
        </button>
    }
}
