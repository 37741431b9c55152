//! Tests for the artifact file store.

use bytes::Bytes;
use storage::ArtifactStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_local_put_get_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = ArtifactStore::local(dir.path()).unwrap();

    assert!(!store.exists("a.png").await.unwrap());
    assert_eq!(store.get("a.png").await.unwrap(), None);

    store.put("a.png", Bytes::from_static(b"first")).await.unwrap();
    assert!(store.exists("a.png").await.unwrap());
    assert_eq!(store.get("a.png").await.unwrap().unwrap(), Bytes::from_static(b"first"));
    assert!(dir.path().join("a.png").is_file());
    assert_eq!(store.full_path("a.png"), Some(dir.path().join("a.png")));
}

#[tokio::test]
async fn test_put_replaces_whole_file() {
    let dir = TempDir::new().unwrap();
    let store = ArtifactStore::local(dir.path()).unwrap();

    store.put("a.png", Bytes::from_static(b"a much longer first write")).await.unwrap();
    store.put("a.png", Bytes::from_static(b"short")).await.unwrap();
    assert_eq!(std::fs::read(dir.path().join("a.png")).unwrap(), b"short");
}

#[tokio::test]
async fn test_local_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("uploads").join("2026").join("02");
    let store = ArtifactStore::local(&root).unwrap();
    store.put("x.png", Bytes::from_static(b"x")).await.unwrap();
    assert!(root.join("x.png").is_file());
}

#[tokio::test]
async fn test_file_removed_out_of_band() {
    let dir = TempDir::new().unwrap();
    let store = ArtifactStore::local(dir.path()).unwrap();
    store.put("gone.png", Bytes::from_static(b"x")).await.unwrap();

    std::fs::remove_file(dir.path().join("gone.png")).unwrap();
    assert!(!store.exists("gone.png").await.unwrap());
    assert_eq!(store.get("gone.png").await.unwrap(), None);
}

#[tokio::test]
async fn test_in_memory_store() {
    let store = ArtifactStore::in_memory();
    assert_eq!(store.full_path("a.png"), None);

    assert!(!store.exists("a.png").await.unwrap());
    store.put("a.png", Bytes::from_static(b"png")).await.unwrap();
    assert!(store.exists("a.png").await.unwrap());
    assert_eq!(store.get("a.png").await.unwrap().unwrap(), Bytes::from_static(b"png"));
}
