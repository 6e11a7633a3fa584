use crate::TodoPatch;

#[test]
fn test_default_patch_is_empty() {
    let patch = TodoPatch::default();
    assert!(patch.is_empty());
}

#[test]
fn test_patch_with_title_is_not_empty() {
    let patch = TodoPatch {
        title: Some("Buy milk".to_string()),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn test_patch_with_completed_is_not_empty() {
    let patch = TodoPatch {
        completed: Some(true),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn test_patch_clearing_description_is_not_empty() {
    // Some(None) means "set description to null", which is a real change
    let patch = TodoPatch {
        description: Some(None),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}
