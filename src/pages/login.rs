//! Login page with a controlled login form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::net::api;
use crate::state::forms::LoginForm;
use crate::state::session::Session;
use crate::state::toast::ToastState;

const LOGGED_IN: &str = "Login successful";

/// Login page — on success the returned access token becomes the session
/// and the app navigates to `/profile`. On failure the toast shows the
/// server's message and the entered fields are kept as-is.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();
    let go_register = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&payload).await {
                Ok(token) => {
                    session.update(|s| s.login(token));
                    toast::success(toasts, LOGGED_IN);
                    navigate("/profile", NavigateOptions::default());
                }
                Err(err) => toast::error(toasts, err.to_string()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Log In"</h2>
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
                    "Log In"
                </button>
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| go_register("/register", NavigateOptions::default())
                >
                    "Don't have an account? Sign Up"
                </button>
            </form>
        </div>
    }
}
