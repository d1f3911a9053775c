use super::*;

#[test]
fn login_href_remembers_requested_path() {
    assert_eq!(login_href(&Route::Orders), "/login?redirect=%2Forders");
    assert_eq!(login_href(&Route::OrderDetail("o-9".to_owned())), "/login?redirect=%2Forders%2Fo-9");
}

#[test]
fn login_href_escapes_query_delimiters_in_ids() {
    let href = login_href(&Route::OrderDetail("a&b#c?d".to_owned()));
    assert_eq!(href, "/login?redirect=%2Forders%2Fa%26b%23c%3Fd");
}

#[test]
fn login_href_round_trips_through_redirect_query() {
    let requested = Route::OrderDetail("a&b=c".to_owned());
    let href = login_href(&requested);
    assert!(!href.contains("a&b"));

    let (_, encoded) = href.split_once("redirect=").unwrap();
    let decoded = urlencoding::decode(encoded).unwrap();
    assert_eq!(return_to_from_query(Some(decoded.as_ref())), Some(requested));
}

#[test]
fn return_to_accepts_app_routes() {
    assert_eq!(return_to_from_query(Some("/orders")), Some(Route::Orders));
    assert_eq!(return_to_from_query(Some(" /checkout ")), Some(Route::Checkout));
    assert_eq!(return_to_from_query(Some("/")), Some(Route::Home));
}

#[test]
fn return_to_ignores_auth_pages() {
    assert_eq!(return_to_from_query(Some("/login")), None);
    assert_eq!(return_to_from_query(Some("/register")), None);
    assert_eq!(return_to_from_query(Some("/auth/success")), None);
}

#[test]
fn return_to_ignores_foreign_or_unknown_targets() {
    assert_eq!(return_to_from_query(None), None);
    assert_eq!(return_to_from_query(Some("https://evil.example/orders")), None);
    assert_eq!(return_to_from_query(Some("//evil.example/x")), None);
    assert_eq!(return_to_from_query(Some("/no/such/page")), None);
}
