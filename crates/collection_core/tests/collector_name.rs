use collection_core::{CollectorName, JsonCollectorNameRepository, RepoError};

#[test]
fn missing_or_empty_file_leaves_name_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("name.json");
    let mut collector = CollectorName::new(JsonCollectorNameRepository::new(&path));

    collector.load().unwrap();
    assert!(!collector.is_set());

    std::fs::write(&path, "").unwrap();
    collector.load().unwrap();
    assert_eq!(collector.get(), None);
}

#[test]
fn set_and_persist_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("name.json");
    let mut collector = CollectorName::new(JsonCollectorNameRepository::new(&path));

    collector.set_and_persist("Ada").unwrap();
    assert_eq!(collector.get(), Some("Ada"));

    let mut next_session = CollectorName::new(JsonCollectorNameRepository::new(&path));
    next_session.load().unwrap();
    assert_eq!(next_session.get(), Some("Ada"));
}

#[test]
fn name_is_set_once_per_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("name.json");
    let mut collector = CollectorName::new(JsonCollectorNameRepository::new(&path));
    collector.set_and_persist("Ada").unwrap();

    let err = collector.set_and_persist("Grace").unwrap_err();

    assert!(matches!(err, RepoError::CollectorNameAlreadySet));
    assert_eq!(collector.get(), Some("Ada"));
    assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "\"Ada\"");
}

#[test]
fn reads_name_written_by_earlier_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("name.json");
    std::fs::write(&path, "\"Record Keeper\"").unwrap();
    let mut collector = CollectorName::new(JsonCollectorNameRepository::new(&path));

    collector.load().unwrap();

    assert_eq!(collector.get(), Some("Record Keeper"));
}
