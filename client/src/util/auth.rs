//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical gating: render nothing until the guard
//! proceeds, show the sign-in notice once, then send the visitor to `/login`
//! with the requested path remembered in the query string.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use storefront::routing::{GuardDecision, Route, guard};
use storefront::state::notice::Notifier;

use crate::state::auth::AuthContext;
use crate::util::browser::ToastNotifier;

/// Query key carrying the route a guard redirect interrupted.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// `/login` link that returns to `requested` after signing in. The path is
/// percent-encoded so ids containing `&`, `#` or `?` survive the query string.
pub fn login_href(requested: &Route) -> String {
    format!("{}?{REDIRECT_QUERY_KEY}={}", Route::Login.path(), urlencoding::encode(&requested.path()))
}

/// Route to continue to after login, read from the `redirect` query value.
/// Auth pages and unknown paths are ignored so a crafted link cannot loop or
/// leave the app.
pub fn return_to_from_query(value: Option<&str>) -> Option<Route> {
    let value = value?.trim();
    if !value.starts_with('/') {
        return None;
    }
    match Route::parse(value) {
        Route::Login | Route::Register | Route::SocialCallback | Route::NotFound(_) => None,
        route => Some(route),
    }
}

/// Gate `route` on the session. Returns whether the page may render; when the
/// guard decides to redirect, the notice is shown once and navigation to
/// `/login` follows after the configured delay if the visitor is still
/// signed out by then.
pub fn install_route_guard<F>(auth: AuthContext, route: Route, navigate: F) -> Memo<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let allowed = {
        let (auth, route) = (auth.clone(), route.clone());
        Memo::new(move |_| matches!(guard(route.clone(), &auth.session.get(), &auth.config), GuardDecision::Proceed(_)))
    };

    let scheduled = StoredValue::new(false);
    let notifier = ToastNotifier::new(auth.notices);
    Effect::new(move || {
        let decision = guard(route.clone(), &auth.session.get(), &auth.config);
        let GuardDecision::RedirectToLogin { requested, notice, delay, .. } = decision else {
            return;
        };
        if scheduled.get_value() {
            return;
        }
        scheduled.set_value(true);
        notifier.notify(notice);

        let href = login_href(&requested);
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        {
            let (session, config) = (auth.session, auth.config.clone());
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if guard(requested, &session.get_untracked(), &config).is_redirect() {
                    navigate(&href, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay;
            navigate(&href, NavigateOptions::default());
        }
    });

    allowed
}
