//! Browser transport for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cookie
//! credentials included, so the session cookie set during the OAuth round
//! trip reaches the backend.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Request failures map to [`ApiError::Transport`]; status and body decoding
//! is shared with the native transport through [`decode_session`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use storefront::StorefrontConfig;
use storefront::net::api::SessionApi;
#[cfg(feature = "hydrate")]
use storefront::net::api::{LOGIN_PATH, LOGIN_SUCCESS_PATH, LOGOUT_PATH};
use storefront::net::error::ApiError;
#[cfg(feature = "hydrate")]
use storefront::net::error::decode_session;
use storefront::net::types::{Credentials, SessionPayload};

#[derive(Clone, Debug)]
pub struct BrowserSessionApi {
    config: StorefrontConfig,
}

impl BrowserSessionApi {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<(u16, String), ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    log::debug!("backend responded: {status}");
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
fn get(url: &str) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::get(url)
        .credentials(web_sys::RequestCredentials::Include)
        .build()
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[async_trait(?Send)]
impl SessionApi for BrowserSessionApi {
    async fn fetch_login_success(&self) -> Result<SessionPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = send(get(&self.config.endpoint(LOGIN_SUCCESS_PATH))?).await?;
            decode_session(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_PATH))
                .credentials(web_sys::RequestCredentials::Include)
                .json(credentials)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let (status, body) = send(request).await?;
            decode_session(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = send(get(&self.config.endpoint(LOGOUT_PATH))?).await?;
            if !(200..300).contains(&status) {
                return Err(ApiError::from_response(status, &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
