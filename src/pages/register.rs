//! Registration page with a controlled signup form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::net::api;
use crate::state::forms::RegisterForm;
use crate::state::toast::ToastState;

const REGISTERED: &str = "Registration successful! Please login.";

/// Registration page — submits the form to `POST /register` and moves on to
/// the login page on success. On failure the toast shows the server's
/// message and the entered fields are kept as-is.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(RegisterForm::default());
    let navigate = use_navigate();
    let go_login = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&payload).await {
                Ok(()) => {
                    toast::success(toasts, REGISTERED);
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => toast::error(toasts, err.to_string()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Sign Up"</h2>
                <label class="auth-card__label">
                    "Username"
                    <input
                        type="text"
                        name="username"
                        prop:value=move || form.get().username
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Email"
                    <input
                        type="email"
                        name="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Password"
                    <input
                        type="password"
                        name="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary">
                    "Sign Up"
                </button>
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| go_login("/login", NavigateOptions::default())
                >
                    "Already have an account? Log in"
                </button>
            </form>
        </div>
    }
}
