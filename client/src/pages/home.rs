//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Storefront"</h1>
            <A href="/orders">"View your orders"</A>
        </div>
    }
}
