use super::*;

#[test]
fn fresh_store_is_anonymous() {
    let store = SessionStore::default();
    store.clear();
    let session = store.get();
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::default();
    store.set("abc123");
    let session = store.get();
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc123"));
}

#[test]
fn set_overwrites_previous_token() {
    let store = SessionStore::default();
    store.set("first");
    store.set("second");
    assert_eq!(store.get().token(), Some("second"));
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore::default();
    store.set("abc123");
    store.clear();
    assert_eq!(store.get().token(), None);
    store.clear();
    assert_eq!(store.get().token(), None);
}

#[test]
fn authenticated_session_exposes_token() {
    let session = Session::authenticated("tok");
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok"));
    assert_ne!(session, Session::default());
}
