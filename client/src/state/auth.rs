//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionStore`] is the source of truth; [`AuthContext::provide`]
//! subscribes a signal to it so route guards and user-aware components
//! re-render on every transition without touching the store directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use storefront::auth::AuthService;
use storefront::state::notice::NoticeBoard;
use storefront::{Session, SessionStatus, SessionStore, StorefrontConfig};

use crate::net::api::BrowserSessionApi;

/// Everything a page needs to run or observe the auth flow.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub store: SessionStore,
    /// Snapshot of `store`, updated after every transition.
    pub session: RwSignal<Session>,
    pub notices: RwSignal<NoticeBoard>,
    pub config: StorefrontConfig,
}

impl AuthContext {
    /// Create the store, mirror it into a signal, and provide the context.
    /// The subscription is dropped when the owning scope is cleaned up.
    pub fn provide(config: StorefrontConfig) -> Self {
        let store = SessionStore::new();
        let session = RwSignal::new(store.snapshot());
        let subscription = store.subscribe(move |snapshot| {
            let _ = session.try_set(snapshot.clone());
        });
        let cleanup_store = store.clone();
        on_cleanup(move || cleanup_store.unsubscribe(subscription));

        let ctx = Self { store, session, notices: RwSignal::new(NoticeBoard::default()), config };
        provide_context(ctx.clone());
        ctx
    }

    /// Auth service over the browser transport, sharing this context's store.
    pub fn service(&self) -> AuthService<BrowserSessionApi> {
        AuthService::new(BrowserSessionApi::new(self.config.clone()), self.store.clone(), self.config.clone())
    }
}

/// Short status line for the callback page.
pub fn callback_status_text(session: &Session) -> String {
    match session.status() {
        SessionStatus::Idle | SessionStatus::Pending => "Signing you in...".to_owned(),
        SessionStatus::Authenticated => format!("Welcome, {}", session_label(session)),
        SessionStatus::Failed => session.error().unwrap_or("Sign-in failed").to_owned(),
    }
}

/// Name shown in the navigation bar, or `None` when signed out.
pub fn nav_user_label(session: &Session) -> Option<String> {
    session.is_authenticated().then(|| session_label(session))
}

fn session_label(session: &Session) -> String {
    session.user().map_or_else(String::new, |user| user.display_name().to_owned())
}
