//! Order history placeholder behind the route guard.
//!
//! Order data fetching lives outside the sign-in flow; this page exists so the
//! guard has a protected route to gate.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use storefront::routing::Route;

use crate::state::auth::{AuthContext, nav_user_label};
use crate::util::auth::install_route_guard;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = auth.session;
    let allowed = install_route_guard(auth, Route::Orders, use_navigate());

    view! {
        <Show when=move || allowed.get() fallback=|| view! { <p class="orders-page__gate">"Checking your session..."</p> }>
            <div class="orders-page">
                <h1>"Your orders"</h1>
                <p>{move || format!("Signed in as {}", nav_user_label(&session.get()).unwrap_or_default())}</p>
            </div>
        </Show>
    }
}
