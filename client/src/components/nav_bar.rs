//! Top navigation bar with the signed-in user and sign-out control.

use leptos::prelude::*;
use leptos_router::components::A;
use storefront::state::notice::Notifier;

use crate::state::auth::{AuthContext, nav_user_label};
use crate::util::browser::ToastNotifier;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = auth.session;
    let busy = RwSignal::new(false);

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            let service = auth.service();
            let notifier = ToastNotifier::new(auth.notices);
            leptos::task::spawn_local(async move {
                notifier.notify(service.logout().await);
                busy.set(false);
            });
        }
    };

    view! {
        <nav class="nav-bar">
            <A href="/">"Storefront"</A>
            <A href="/orders">"Orders"</A>
            {move || match nav_user_label(&session.get()) {
                Some(name) => view! {
                    <span class="nav-bar__user">{name}</span>
                    <button class="nav-bar__logout" disabled=move || busy.get() on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                }
                .into_any(),
                None => view! { <A href="/login">"Sign in"</A> }.into_any(),
            }}
        </nav>
    }
}
