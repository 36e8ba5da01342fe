use super::*;
use crate::types::UserType;

fn user(email: &str) -> User {
    User { email: email.to_owned(), user_type: UserType::Usuario, ..User::default() }
}

fn store() -> (Arc<MemoryStore>, SessionStore) {
    let backing = Arc::new(MemoryStore::new());
    let session = SessionStore::new(backing.clone());
    (backing, session)
}

#[test]
fn save_then_read_back() {
    let (_, session) = store();
    session.save("abc", &user("a@b.com"));
    assert_eq!(session.token().as_deref(), Some("abc"));
    assert_eq!(session.user().unwrap().email, "a@b.com");
}

#[test]
fn clear_removes_both_keys() {
    let (backing, session) = store();
    session.save("abc", &user("a@b.com"));
    session.clear();
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(backing.is_empty());
}

#[test]
fn corrupt_user_json_reads_as_absent() {
    let (backing, session) = store();
    backing.set(USER_KEY, "{not json");
    assert!(session.user().is_none());
}

#[test]
fn blank_token_reads_as_absent() {
    let (backing, session) = store();
    backing.set(TOKEN_KEY, "   ");
    assert!(session.token().is_none());
}

#[test]
fn keys_are_namespaced() {
    assert!(TOKEN_KEY.starts_with("huellitas:"));
    assert!(USER_KEY.starts_with("huellitas:"));
    assert_ne!(TOKEN_KEY, USER_KEY);
}

#[test]
fn save_user_keeps_token() {
    let (_, session) = store();
    session.save("abc", &user("a@b.com"));
    session.save_user(&user("new@b.com"));
    assert_eq!(session.token().as_deref(), Some("abc"));
    assert_eq!(session.user().unwrap().email, "new@b.com");
}
