//! OAuth callback page mounted on `/auth/success`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend redirects here once the provider round trip set the session
//! cookie. The page runs one [`SocialCallback`] per mount and cancels it on
//! cleanup, so leaving early never applies a late response.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use storefront::auth::SocialCallback;

use crate::state::auth::{AuthContext, callback_status_text};
use crate::util::browser::{BrowserNavigator, ToastNotifier};

#[component]
pub fn AuthSuccessPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = auth.session;

    let callback = SocialCallback::new(
        auth.service(),
        BrowserNavigator::new(use_navigate()),
        ToastNotifier::new(auth.notices),
    );
    let cancel = callback.cancel_token();
    on_cleanup(move || cancel.cancel());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut callback = callback;
        let outcome = callback.run().await;
        log::debug!("social callback finished: {outcome:?}");
    });
    #[cfg(not(feature = "hydrate"))]
    drop(callback);

    view! {
        <div class="auth-callback">
            <p class="auth-callback__status">{move || callback_status_text(&session.get())}</p>
        </div>
    }
}
