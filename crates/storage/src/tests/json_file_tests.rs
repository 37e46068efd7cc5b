use super::{create_test_data, create_test_store};
use crate::{StorageError, UsageStore};

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn load_missing_file_is_none() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn save_creates_parent_dirs_and_round_trips() {
    let (store, _temp_dir) = create_test_store();
    let data = create_test_data(&["s1", "s2"]);

    store.save(&data).await.unwrap();
    assert!(store.path().exists());

    let loaded = store.load().await.unwrap().unwrap().normalize();
    assert_eq!(loaded, data);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn save_leaves_no_temp_file_behind() {
    let (store, temp_dir) = create_test_store();
    store.save(&create_test_data(&["s1"])).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(temp_dir.path().join("audit"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["usage-data.json".to_owned()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn concurrent_saves_never_tear_the_document() {
    let (store, temp_dir) = create_test_store();
    let small = create_test_data(&["s1"]);
    let large = create_test_data(&["a", "b", "c", "d", "e", "f", "g", "h"]);

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        let data = if i % 2 == 0 { small.clone() } else { large.clone() };
        handles.push(tokio::spawn(async move { store.save(&data).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let loaded = store.load().await.unwrap().unwrap().normalize();
    assert!(loaded == small || loaded == large, "torn document: {loaded:?}");

    let names: Vec<String> = std::fs::read_dir(temp_dir.path().join("audit"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["usage-data.json".to_owned()]);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn unreadable_store_is_io_error() {
    let (store, _temp_dir) = create_test_store();
    std::fs::create_dir_all(store.path()).unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }), "unexpected error: {err}");
    assert!(!err.is_corruption());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn invalid_json_is_data_corruption() {
    let (store, _temp_dir) = create_test_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{not json").unwrap();

    let err = store.load().await.unwrap_err();
    assert!(err.is_corruption(), "unexpected error: {err}");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn wrong_shape_is_data_corruption() {
    let (store, _temp_dir) = create_test_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"sessions": {"id": "s1"}}"#).unwrap();

    assert!(store.load().await.unwrap_err().is_corruption());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn non_utf8_is_data_corruption() {
    let (store, _temp_dir) = create_test_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();

    assert!(store.load().await.unwrap_err().is_corruption());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn string_summary_fields_survive_load() {
    let (store, _temp_dir) = create_test_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"summary": {"totalSessions": "5"}}"#).unwrap();

    let data = store.load().await.unwrap().unwrap().normalize();
    assert!(data.sessions.is_empty());
    assert_eq!(data.summary.total_sessions, 5);
}
