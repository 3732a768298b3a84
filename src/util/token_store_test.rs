use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().load(), None);
}

#[test]
fn memory_store_save_then_load() {
    let store = MemoryTokenStore::new();
    store.save("T").unwrap();
    assert_eq!(store.load().as_deref(), Some("T"));
    store.save("T2").unwrap();
    assert_eq!(store.load().as_deref(), Some("T2"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("T");
    assert_eq!(store.clear(), Ok(()));
    assert_eq!(store.clear(), Ok(()));
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_empty_without_browser() {
    let store = LocalStorageTokenStore::new("token");
    assert_eq!(store.load(), None);
    assert_eq!(store.save("T"), Err(StorageError::Unavailable));
    assert_eq!(store.clear(), Ok(()));
}

#[test]
fn remove_error_message_names_the_failure() {
    let err = StorageError::Remove("SecurityError".to_owned());
    assert_eq!(err.to_string(), "token removal failed: SecurityError");
}
