//! Catch-all 404 page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Not-found page with shortcuts back to login and registration.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_login = use_navigate();
    let go_register = use_navigate();

    view! {
        <div class="not-found-page">
            <h2>"Page Not Found"</h2>
            <div class="not-found-page__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| go_login("/login", NavigateOptions::default())
                >
                    "Log In"
                </button>
                <button
                    class="btn"
                    on:click=move |_| go_register("/register", NavigateOptions::default())
                >
                    "Sign Up"
                </button>
            </div>
        </div>
    }
}
