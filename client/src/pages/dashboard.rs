//! Dashboard page showing the signed-in user and the protected listings.

use leptos::prelude::*;

use crate::components::product_table::ProductTable;
use crate::components::user_table::UserTable;
use crate::net::api;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = move || auth.with(|state| state.access_token.clone().unwrap_or_default());

    // Both listings refetch whenever the access token changes.
    let users = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_users(&token).await }
    });
    let products = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_products(&token).await }
    });

    let username = move || auth.with(|state| state.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let email = move || auth.with(|state| state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::util::auth::sign_out(auth));
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <div class="dashboard-page__user">
                    <span class="dashboard-page__username">{username}</span>
                    <span class="dashboard-page__email">{email}</span>
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </header>

            <div class="dashboard-page__grid">
                <section class="dashboard-page__panel">
                    <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                        {move || {
                            users
                                .get()
                                .map(|result| match result {
                                    Ok(directory) => view! { <UserTable directory=directory/> }.into_any(),
                                    Err(e) => view! { <p class="dashboard-page__error">{e}</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                </section>
                <section class="dashboard-page__panel">
                    <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                        {move || {
                            products
                                .get()
                                .map(|result| match result {
                                    Ok(catalog) => view! { <ProductTable catalog=catalog/> }.into_any(),
                                    Err(e) => view! { <p class="dashboard-page__error">{e}</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </div>
    }
}
