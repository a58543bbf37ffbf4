use futures::executor::block_on;

use super::*;
use crate::auth::test_support::Harness;
use crate::state::session::{SessionRecord, SessionStore};

fn form(username: &str, password: &str) -> LoginForm {
    LoginForm { username: username.to_owned(), password: password.to_owned() }
}

#[test]
fn empty_fields_are_rejected_locally() {
    let h = Harness::new();
    block_on(h.flows.login(&form(" ", "pw"))).unwrap_err();
    assert_eq!(h.shown(), vec!["All fields are required."]);
    assert_eq!(h.request_count(), 0);
}

#[test]
fn posts_to_login_endpoint() {
    let h = Harness::new();
    h.transport.reply(serde_json::json!({"success": false, "message": "Invalid credentials"}));

    block_on(h.flows.login(&form(" alice@example.com ", "secret1"))).unwrap_err();

    let requests = h.transport.requests.borrow();
    assert_eq!(requests[0].0, "http://localhost:5000/login");
    assert_eq!(requests[0].1, serde_json::json!({"username": "alice@example.com", "password": "secret1"}));
    drop(requests);
    assert_eq!(h.shown(), vec!["Invalid credentials"]);
}

#[test]
fn success_persists_and_redirects_home() {
    let h = Harness::new();
    h.transport.reply(serde_json::json!({
        "success": true,
        "user": {"user_id": 3, "username": "alice", "email": "alice@example.com", "role": "customer"}
    }));

    let ok = block_on(h.flows.login(&form("alice", "secret1"))).unwrap();

    assert_eq!(ok.redirect_to, "index.html");
    assert_eq!(h.store.load(), Some(SessionRecord::customer("3", "alice")));
    assert_eq!(h.acks(), vec!["Login successful!"]);
}

#[test]
fn rejection_without_message_uses_fallback() {
    let h = Harness::new();
    h.transport.reply(serde_json::json!({"success": false}));
    block_on(h.flows.login(&form("alice", "secret1"))).unwrap_err();
    assert_eq!(h.shown(), vec!["Login failed. Please try again."]);
}

#[test]
fn later_sign_in_overwrites_session() {
    let h = Harness::new();
    h.transport.reply(serde_json::json!({"success": true, "user": {"id": "1", "username": "first"}}));
    h.transport.reply(serde_json::json!({"success": true, "user": {"id": "2", "username": "second"}}));

    block_on(h.flows.login(&form("first", "secret1"))).unwrap();
    block_on(h.flows.login(&form("second", "secret1"))).unwrap();

    assert_eq!(h.store.load(), Some(SessionRecord::customer("2", "second")));
}
