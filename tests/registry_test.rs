use tabletop_scene::data_structures::registry::{RegistryError, TagRegistry};

#[test]
fn should_return_insertion_slot_for_tag() {
    let mut registry = TagRegistry::new();
    for tag in ["a", "b", "c"] {
        registry.insert(tag, tag.to_uppercase()).unwrap();
    }

    assert_eq!(registry.slot("b"), Some(1));
    assert_eq!(registry.get("c").map(String::as_str), Some("C"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn should_report_missing_tag_as_none() {
    let empty: TagRegistry<u32> = TagRegistry::new();
    assert_eq!(empty.slot("anything"), None);
    assert!(empty.get("anything").is_none());

    let mut registry = TagRegistry::new();
    registry.insert("wood", 1).unwrap();
    assert_eq!(registry.slot("metal"), None);
}

#[test]
fn should_resolve_duplicate_tag_to_first_entry() {
    let mut registry = TagRegistry::new();
    assert_eq!(registry.insert("plastic", 1), Ok(0));
    assert_eq!(registry.insert("plastic", 2), Ok(1));

    assert_eq!(registry.slot("plastic"), Some(0));
    assert_eq!(registry.get("plastic"), Some(&1));
    // the shadowed entry still holds its slot
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.entry(1).map(|entry| entry.value), Some(2));
}

#[test]
fn should_reject_inserts_past_capacity() {
    let mut registry = TagRegistry::bounded(2);
    registry.insert("a", ()).unwrap();
    registry.insert("b", ()).unwrap();
    assert!(registry.is_full());

    let err = registry.insert("c", ()).unwrap_err();
    assert_eq!(
        err,
        RegistryError::Full {
            tag: "c".to_string(),
            capacity: 2
        }
    );
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.slot("c"), None);
}

#[test]
fn should_forget_everything_after_drain() {
    let mut registry = TagRegistry::bounded(4);
    registry.insert("a", 1).unwrap();
    registry.insert("b", 2).unwrap();

    let drained: Vec<_> = registry.drain().map(|entry| entry.tag).collect();
    assert_eq!(drained, vec!["a".to_string(), "b".to_string()]);
    assert!(registry.is_empty());
    assert_eq!(registry.slot("a"), None);
    assert_eq!(registry.insert("c", 3), Ok(0));
}
