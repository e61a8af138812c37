//! Login Page Component
//!
//! Demo credential gate in front of the list pages.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{NavContext, Page};

/// Compiled-in demo credentials. This gate is a stage prop, not
/// authentication: the literals ship inside the WASM bundle and nothing
/// behind the gate is protected. Do not reuse this pattern for real access
/// control.
const DEMO_EMAIL: &str = "1234";
const DEMO_PASSWORD: &str = "1234";

/// Login form gating the route to the Quotes page
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get() == DEMO_EMAIL && password.get() == DEMO_PASSWORD {
            ctx.goto(Page::Quotes);
        } else {
            set_error.set("Invalid email or password".to_string());
        }
    };

    view! {
        <div class="login-layout">
            <div class="login-card">
                <h1 class="brand">"Quoteboard"</h1>
                <form class="login-form" on:submit=on_submit>
                    <h2>"Login"</h2>

                    {move || {
                        let msg = error.get();
                        (!msg.is_empty()).then(|| view! { <p class="form-error">{msg}</p> })
                    }}

                    <label for="email">"Email"</label>
                    <input
                        type="text"
                        id="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                        }
                    />

                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" class="primary">
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
