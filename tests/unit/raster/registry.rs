use super::*;

#[test]
fn identical_payloads_share_one_handle() {
    let mut registry = InMemoryImageRegistry::new();
    let a = registry.register(b"png-bytes").unwrap();
    let b = registry.register(b"png-bytes").unwrap();

    assert_eq!(a, b);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(a), Some(b"png-bytes".as_slice()));
}

#[test]
fn distinct_payloads_get_distinct_handles() {
    let mut registry = InMemoryImageRegistry::new();
    let a = registry.register(b"first").unwrap();
    let b = registry.register(b"second").unwrap();

    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);
}

#[test]
fn empty_payload_is_rejected() {
    let mut registry = InMemoryImageRegistry::new();
    let err = registry.register(b"").unwrap_err();
    assert!(matches!(err, SlideloomError::Registration(_)));
    assert!(registry.is_empty());
}

#[test]
fn unknown_handle_reads_back_nothing() {
    let registry = InMemoryImageRegistry::new();
    assert!(registry.get(ImageHandle::from_u64(42)).is_none());
}
