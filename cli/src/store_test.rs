use std::sync::Arc;

use api_client::User;
use api_client::storage::{SessionStore, TOKEN_KEY};

use super::*;

fn session_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("nested").join("session.json")
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(session_path(&dir)).unwrap();
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!store.path().exists());
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);

    let store = FileStore::open(&path).unwrap();
    store.set(TOKEN_KEY, "abc");
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn removing_last_key_deletes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    let store = FileStore::open(&path).unwrap();

    store.set(TOKEN_KEY, "abc");
    assert!(path.exists());
    store.remove(TOKEN_KEY);

    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(TOKEN_KEY), None);

    store.set(TOKEN_KEY, "fresh");
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("fresh"));
}

#[test]
fn backs_a_session_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = session_path(&dir);
    let user = User { email: "ana@huellitas.org".into(), name: "Ana".into(), ..User::default() };

    let session = SessionStore::new(Arc::new(FileStore::open(&path).unwrap()));
    session.save("tok-1", &user);

    let restored = SessionStore::new(Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(restored.token().as_deref(), Some("tok-1"));
    assert_eq!(restored.user().map(|u| u.email), Some("ana@huellitas.org".to_owned()));

    restored.clear();
    assert!(!path.exists());
}

#[test]
fn default_path_ends_in_session_file() {
    let path = default_session_path();
    assert!(path.ends_with(".huellitas/session.json"));
}
