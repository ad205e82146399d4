//! Profile page: one-shot authenticated profile fetch plus logout.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::net::api;
use crate::net::types::Profile;
use crate::state::session::Session;
use crate::state::toast::ToastState;

const LOADED: &str = "Profile loaded successfully";
const LOAD_FAILED: &str = "Failed to load profile. Redirecting to login...";
const LOGGED_OUT: &str = "Logged out successfully";

/// Lifecycle of the one-shot profile fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Profile),
    Failed,
}

/// Profile page — fetches the profile with the session's bearer token on
/// mount and renders nothing until it arrives.
///
/// Any fetch failure invalidates the session: the token is dropped and the
/// app navigates back to `/login`. The route guard has already vouched for
/// an authenticated session by the time this renders.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let load = RwSignal::new(ProfileLoad::Idle);

    // Staleness guard: a response arriving after the page unmounts must not
    // touch state or navigate.
    let cancelled = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let cancelled = Arc::clone(&cancelled);
        move || cancelled.store(true, Ordering::Relaxed)
    });

    // Fetch on mount, and again if a re-login swaps the token.
    Effect::new({
        let navigate = navigate.clone();
        let cancelled = Arc::clone(&cancelled);
        move || {
            let Some(token) = session.get().token().map(str::to_owned) else {
                return;
            };
            load.set(ProfileLoad::Loading);
            let navigate = navigate.clone();
            let cancelled = Arc::clone(&cancelled);
            leptos::task::spawn_local(async move {
                let result = api::fetch_profile(&token).await;
                if cancelled.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(profile) => {
                        toast::success(toasts, LOADED);
                        load.set(ProfileLoad::Loaded(profile));
                    }
                    Err(err) => {
                        log::warn!("profile fetch failed: {err}");
                        toast::error(toasts, LOAD_FAILED);
                        load.set(ProfileLoad::Failed);
                        session.update(Session::logout);
                        navigate("/login", NavigateOptions::default());
                    }
                }
            });
        }
    });

    let on_logout = move |_| {
        // Authoritative locally: the session ends no matter what the server
        // says about the logout request.
        session.update(Session::logout);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::logout().await {
                Ok(()) => toast::success(toasts, LOGGED_OUT),
                Err(err) => toast::error(toasts, err.to_string()),
            }
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <div class="profile-page">
            {move || match load.get() {
                ProfileLoad::Loaded(profile) => {
                    let heading = format!("Welcome {} To Your Profile", profile.username);
                    view! {
                        <div class="profile-card">
                            <h2>{heading}</h2>
                            <div class="profile-card__field">
                                <span class="profile-card__label">"Username"</span>
                                <p>{profile.username}</p>
                            </div>
                            <div class="profile-card__field">
                                <span class="profile-card__label">"Email"</span>
                                <p>{profile.email}</p>
                            </div>
                            <button class="btn btn--danger" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                _ => ().into_any(),
            }}
        </div>
    }
}
