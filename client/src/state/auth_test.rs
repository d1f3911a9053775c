use super::*;
use storefront::SessionUser;

fn signed_in(user: SessionUser) -> Session {
    let store = SessionStore::new();
    let attempt = store.login_start();
    store.login_success(attempt, user, "tok".to_owned());
    store.snapshot()
}

#[test]
fn callback_status_while_pending() {
    let store = SessionStore::new();
    store.login_start();
    assert_eq!(callback_status_text(&store.snapshot()), "Signing you in...");
}

#[test]
fn callback_status_greets_signed_in_user() {
    let session = signed_in(SessionUser::new("u1").with_name("Alice"));
    assert_eq!(callback_status_text(&session), "Welcome, Alice");
}

#[test]
fn callback_status_shows_backend_error() {
    let store = SessionStore::new();
    let attempt = store.login_start();
    store.login_failed(attempt, "invalid session");
    assert_eq!(callback_status_text(&store.snapshot()), "invalid session");
}

#[test]
fn nav_label_falls_back_to_email() {
    let session = signed_in(SessionUser::new("u1").with_email("a@example.com"));
    assert_eq!(nav_user_label(&session).as_deref(), Some("a@example.com"));
}

#[test]
fn nav_label_absent_when_signed_out() {
    assert_eq!(nav_user_label(&Session::default()), None);
}
