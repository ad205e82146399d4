//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastContainer;
use crate::pages::{
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::route::{Destination, guard};
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the app-wide session and toast contexts and declares the routes.
/// Every route dispatches through [`Routed`] so the guard decides what
/// actually renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // App-wide state: one session, one toast queue.
    let session = RwSignal::new(Session::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    view! {
        <Title text="Account Portal"/>
        <ToastContainer/>

        <Router>
            <Routes fallback=|| view! { <Routed path="*"/> }>
                <Route path=StaticSegment("register") view=|| view! { <Routed path="/register"/> }/>
                <Route path=StaticSegment("login") view=|| view! { <Routed path="/login"/> }/>
                <Route path=StaticSegment("profile") view=|| view! { <Routed path="/profile"/> }/>
                <Route path=StaticSegment("") view=|| view! { <Routed path="/"/> }/>
            </Routes>
        </Router>
    }
}

/// Render whatever destination the route guard picks for `path`.
///
/// Reactive over the session, so logging out while on `/profile`
/// immediately becomes a redirect to `/login`.
#[component]
fn Routed(path: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || match guard(&session.get(), path) {
        Destination::Register => view! { <RegisterPage/> }.into_any(),
        Destination::Login => view! { <LoginPage/> }.into_any(),
        Destination::Profile => view! { <ProfilePage/> }.into_any(),
        Destination::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
        Destination::RedirectRegister => view! { <Redirect path="/register"/> }.into_any(),
        Destination::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
