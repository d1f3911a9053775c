use super::*;
use futures::executor::block_on;

fn api() -> BrowserSessionApi {
    BrowserSessionApi::new(StorefrontConfig::new("https://api.example.test/api/v1").unwrap())
}

#[test]
fn server_render_session_fetch_is_unavailable() {
    assert_eq!(block_on(api().fetch_login_success()), Err(ApiError::Unavailable));
}

#[test]
fn server_render_login_is_unavailable() {
    let credentials = Credentials::validated("a@b.co", "pw").unwrap();
    assert_eq!(block_on(api().login(&credentials)), Err(ApiError::Unavailable));
}

#[test]
fn server_render_logout_is_unavailable() {
    assert_eq!(block_on(api().logout()), Err(ApiError::Unavailable));
}

#[test]
fn keeps_config_for_endpoint_building() {
    assert_eq!(api().config().endpoint("/auth/login"), "https://api.example.test/api/v1/auth/login");
}
