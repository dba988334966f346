//! Top-level page gating the app on authentication state.
//!
//! DESIGN
//! ======
//! Three mutually exclusive outcomes driven by two flags from the auth
//! context. The selection is a pure function so it can be tested without a
//! renderer; the component only maps the outcome to a view. Loading wins over
//! everything else, so a sign-in that is still resolving never flashes the
//! dashboard or the login form.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthState;

/// Which screen the home route shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeView {
    Loading,
    Dashboard,
    Login,
}

#[must_use]
pub fn select_home_view(is_loading: bool, is_authenticated: bool) -> HomeView {
    if is_loading {
        HomeView::Loading
    } else if is_authenticated {
        HomeView::Dashboard
    } else {
        HomeView::Login
    }
}

impl From<&AuthState> for HomeView {
    fn from(state: &AuthState) -> Self {
        select_home_view(state.is_loading(), state.is_authenticated())
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Memoized so token or profile changes do not remount the current screen.
    let current = Memo::new(move |_| auth.with(|state| HomeView::from(state)));

    move || match current.get() {
        HomeView::Loading => view! { <LoadingScreen/> }.into_any(),
        HomeView::Dashboard => view! { <DashboardPage/> }.into_any(),
        HomeView::Login => view! { <LoginPage/> }.into_any(),
    }
}
