//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toast::ToastStack};
use crate::pages::{auth_success::AuthSuccessPage, home::HomePage, login::LoginPage, orders::OrdersPage};
use crate::state::auth::AuthContext;
use crate::util::config::web_config;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. A bundle built
/// without a backend URL renders the configuration error instead of the app.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match web_config() {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("storefront misconfigured: {err}");
            return view! { <p class="config-error">{err.to_string()}</p> }.into_any();
        }
    };
    AuthContext::provide(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <NavBar/>
            <ToastStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("success")) view=AuthSuccessPage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
            </Routes>
        </Router>
    }
    .into_any()
}
