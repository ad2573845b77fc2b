use collection_core::{CategoryRegistry, JsonCategoryRepository, RepoError};

fn seeded_registry(dir: &std::path::Path) -> CategoryRegistry<JsonCategoryRepository> {
    let path = dir.join("type.json");
    std::fs::write(&path, r#"["Records", "Stamps"]"#).unwrap();
    let mut registry = CategoryRegistry::new(JsonCategoryRepository::new(path));
    registry.load().unwrap();
    registry
}

#[test]
fn load_reads_labels_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let registry = seeded_registry(dir.path());

    assert_eq!(registry.labels(), ["Records", "Stamps"]);
    assert!(registry.contains("Stamps"));
    assert!(!registry.contains("stamps"));
}

#[test]
fn add_appends_and_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = seeded_registry(dir.path());

    registry.add("Coins").unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.labels().last().map(String::as_str), Some("Coins"));

    let mut reloaded = CategoryRegistry::new(JsonCategoryRepository::new(dir.path().join("type.json")));
    reloaded.load().unwrap();
    assert_eq!(reloaded.snapshot(), vec!["Records", "Stamps", "Coins"]);
}

#[test]
fn add_does_not_check_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = seeded_registry(dir.path());

    registry.add("Stamps").unwrap();

    assert_eq!(registry.snapshot(), vec!["Records", "Stamps", "Stamps"]);
}

#[test]
fn missing_file_is_a_precondition_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("type.json");
    let mut registry = CategoryRegistry::new(JsonCategoryRepository::new(&path));

    let err = registry.load().unwrap_err();

    assert!(matches!(err, RepoError::MissingCategories(ref missing) if *missing == path));
    assert!(registry.is_empty());
}

#[test]
fn empty_file_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("type.json");
    std::fs::write(&path, "").unwrap();
    let mut registry = CategoryRegistry::new(JsonCategoryRepository::new(&path));

    let err = registry.load().unwrap_err();

    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn failed_add_keeps_label_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = seeded_registry(dir.path());
    let path = dir.path().join("type.json");
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let err = registry.add("Coins").unwrap_err();

    assert!(matches!(err, RepoError::Storage(_)));
    assert_eq!(registry.len(), 3);
}
