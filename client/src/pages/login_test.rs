use super::*;

#[test]
fn submit_label_reflects_request_progress() {
    let mut request = AuthRequestState::default();
    assert_eq!(submit_label(&request), "Sign in");
    request.begin();
    assert_eq!(submit_label(&request), "Signing in...");
    request.fail("Enter your password.");
    assert_eq!(submit_label(&request), "Sign in");
}
