//! Login page: email + password form and the Google social login button.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use storefront::auth::social::social_login_url;
use storefront::auth::{AuthOutcome, SocialProvider, begin_social_login};
use storefront::routing::Navigator;
use storefront::state::notice::Notifier;
use storefront::state::request::AuthRequestState;

use crate::state::auth::AuthContext;
use crate::util::auth::{REDIRECT_QUERY_KEY, return_to_from_query};
use crate::util::browser::{BrowserNavigator, ToastNotifier};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let request = RwSignal::new(AuthRequestState::default());

    let on_submit = {
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if request.get().is_fetching {
                return;
            }
            request.update(AuthRequestState::begin);

            let return_to = return_to_from_query(query.get().get(REDIRECT_QUERY_KEY).as_deref());
            let service = auth.service();
            let navigator = BrowserNavigator::new(navigate.clone());
            let notifier = ToastNotifier::new(auth.notices);
            let (email_value, password_value) = (email.get(), password.get());
            leptos::task::spawn_local(async move {
                let outcome = service.login_with_credentials(&email_value, &password_value, return_to).await;
                request.update(|state| outcome.apply_to(state));
                match outcome {
                    AuthOutcome::Authenticated { redirect } => navigator.push(&redirect),
                    AuthOutcome::Failed { notice } => notifier.notify(notice),
                    AuthOutcome::Invalid(_) | AuthOutcome::Cancelled | AuthOutcome::Superseded => {}
                }
            });
        }
    };

    let provider = SocialProvider::Google;
    let social_href = social_login_url(&auth.config, provider);
    let on_social = {
        let config = auth.config.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            begin_social_login(&config, provider, &BrowserNavigator::new(navigate.clone()));
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || request.get().is_fetching>
                        {move || submit_label(&request.get())}
                    </button>
                </form>
                <Show when=move || request.get().error.is_some()>
                    <p class="login-message">{move || request.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <a href=social_href class="login-button login-button--social" on:click=on_social>
                    {provider.label()}
                </a>
            </div>
        </div>
    }
}

fn submit_label(request: &AuthRequestState) -> &'static str {
    if request.is_fetching { "Signing in..." } else { "Sign in" }
}
