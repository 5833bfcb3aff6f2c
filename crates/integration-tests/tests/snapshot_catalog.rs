//! Snapshot adapter + queue catalog tests
//!
//! Loads recorded processes from disk and walks them through stop/resume
//! cycles the way a debugger session would.

use std::io::Write;
use std::sync::Arc;

use serde_json::json;

use queuescope_core::application::QueueCatalog;
use queuescope_core::domain::{Address, Queue, QueueId, QueueKind};
use queuescope_core::port::ProcessHandle;
use queuescope_infra_snapshot::{load_process, ProcessSnapshot, SnapshotConfig, SnapshotProcess};

fn first_stop() -> serde_json::Value {
    json!({
        "pid": 4242,
        "stop_id": 1,
        "threads": [
            { "tid": 100, "queue_id": 1 },
            { "tid": 101, "queue_id": 2 },
            { "tid": 102, "queue_id": 2 },
            { "tid": 103 }
        ],
        "queues": [
            {
                "id": 1, "name": "com.apple.main-thread", "kind": "SERIAL",
                "running": 1, "pending": 2, "address": 4096,
                "pending_items": [
                    { "item_ref": 8192, "kind": "BLOCK", "invoke_address": 12288,
                      "enqueuing_thread": 101, "enqueuing_queue": 2,
                      "enqueuing_queue_label": "com.example.io",
                      "enqueuing_backtrace": [16384, 16448], "stop_id": 1 },
                    { "item_ref": 8256, "kind": "FUNCTION" }
                ]
            },
            {
                "id": 2, "name": "com.example.io", "kind": "CONCURRENT",
                "running": 2, "pending": 0, "address": 4352
            },
            { "id": 3, "name": "" }
        ]
    })
}

fn second_stop() -> serde_json::Value {
    json!({
        "pid": 4242,
        "stop_id": 2,
        "threads": [{ "tid": 100, "queue_id": 1 }],
        "queues": [
            {
                "id": 1, "name": "com.apple.main-thread", "kind": "SERIAL",
                "running": 1, "pending": 3, "address": 4096,
                "pending_items": [
                    { "item_ref": 8192 }, { "item_ref": 8256 }, { "item_ref": 8320 }
                ]
            }
        ]
    })
}

fn write_snapshot(value: &serde_json::Value) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    Ok(file)
}

fn config_for(file: &tempfile::NamedTempFile) -> SnapshotConfig {
    SnapshotConfig {
        snapshot_path: file.path().to_path_buf(),
        ..SnapshotConfig::default()
    }
}

#[test]
fn test_catalog_lists_recorded_queues() -> anyhow::Result<()> {
    let file = write_snapshot(&first_stop())?;
    let process: Arc<dyn ProcessHandle> = load_process(&config_for(&file))?;
    let mut catalog = QueueCatalog::new(&process);

    let queues = catalog.queues();
    assert_eq!(queues.len(), 3);

    let main = queues.find_by_id(QueueId::new(1)).expect("main queue");
    assert_eq!(main.name(), Some("com.apple.main-thread"));
    assert_eq!(main.kind(), QueueKind::Serial);
    assert_eq!(main.pending_work_items(), 2);

    let io = queues
        .find_by_native_address(Address::new(4352))
        .expect("io queue by address");
    assert_eq!(io.id(), QueueId::new(2));
    assert_eq!(io.running_work_items(), 2);

    let unnamed = queues.find_by_index_id(3).expect("queue 3");
    assert_eq!(unnamed.name(), Some(""));
    assert_eq!(unnamed.native_address(), Address::INVALID);

    Ok(())
}

#[test]
fn test_threads_and_pending_items_through_catalog() -> anyhow::Result<()> {
    let file = write_snapshot(&first_stop())?;
    let process: Arc<dyn ProcessHandle> = load_process(&config_for(&file))?;
    let mut catalog = QueueCatalog::new(&process);

    let io = catalog
        .queues()
        .find_by_id_mut(QueueId::new(2))
        .expect("io queue");
    let tids: Vec<u64> = io.threads().iter().map(|t| t.id()).collect();
    assert_eq!(tids, vec![101, 102]);
    assert!(io.pending_items().is_empty());

    let main = catalog
        .queues()
        .find_by_id_mut(QueueId::new(1))
        .expect("main queue");
    let items = main.pending_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].invoke_address(), Address::new(12288));
    assert_eq!(items[0].enqueuing_thread(), Some(101));
    assert_eq!(items[0].enqueuing_queue_label(), Some("com.example.io"));
    assert_eq!(items[0].enqueuing_backtrace().len(), 2);
    assert_eq!(items[1].enqueuing_thread(), None);

    Ok(())
}

#[test]
fn test_stop_produces_fresh_queues() -> anyhow::Result<()> {
    let file = write_snapshot(&first_stop())?;
    let snapshot_process = load_process(&config_for(&file))?;
    let process: Arc<dyn ProcessHandle> = snapshot_process.clone();
    let mut catalog = QueueCatalog::new(&process);

    let main = catalog
        .queues()
        .find_by_id_mut(QueueId::new(1))
        .expect("main queue");
    assert_eq!(main.pending_items().len(), 2);

    let next = ProcessSnapshot::from_json_str(&second_stop().to_string())?;
    snapshot_process.record_stop(next)?;

    let queues = catalog.queues();
    assert_eq!(queues.len(), 1);
    let main = queues.find_by_id_mut(QueueId::new(1)).expect("main queue");
    assert_eq!(main.pending_work_items(), 3);
    assert_eq!(main.pending_items().len(), 3);
    assert_eq!(main.threads().len(), 1);
    assert_eq!(catalog.stop_id(), Some(2));

    Ok(())
}

#[test]
fn test_queue_kept_across_stop_keeps_its_cache() -> anyhow::Result<()> {
    let file = write_snapshot(&first_stop())?;
    let snapshot_process = load_process(&config_for(&file))?;
    let process: Arc<dyn ProcessHandle> = snapshot_process.clone();

    let mut queue = Queue::new(&process, QueueId::new(1), None);
    assert_eq!(queue.pending_items().len(), 2);

    let next = ProcessSnapshot::from_json_str(&second_stop().to_string())?;
    snapshot_process.record_stop(next)?;

    // Populate-once: the old handle still reports what it first saw
    assert_eq!(queue.pending_items().len(), 2);
    // Thread membership is live
    assert_eq!(queue.threads().len(), 1);

    Ok(())
}

#[test]
fn test_unsupported_runtime_degrades_to_empty() -> anyhow::Result<()> {
    let mut value = first_stop();
    value["runtime_supported"] = json!(false);
    let file = write_snapshot(&value)?;

    let process: Arc<dyn ProcessHandle> = load_process(&config_for(&file))?;
    assert!(process.introspector().is_none());

    let mut catalog = QueueCatalog::new(&process);
    assert!(catalog.queues().is_empty());

    let mut queue = Queue::new(&process, QueueId::new(1), None);
    assert!(queue.pending_items().is_empty());
    assert_eq!(queue.threads().len(), 1);

    Ok(())
}

#[test]
fn test_detached_process_empties_catalog_and_queues() -> anyhow::Result<()> {
    let file = write_snapshot(&first_stop())?;
    let snapshot = ProcessSnapshot::from_path(file.path())?;
    let process: Arc<dyn ProcessHandle> =
        SnapshotProcess::new(snapshot, &SnapshotConfig::default());

    let mut catalog = QueueCatalog::new(&process);
    let mut orphan = Queue::new(&process, QueueId::new(2), None);
    assert_eq!(catalog.queues().len(), 3);

    drop(process);

    assert!(catalog.queues().is_empty());
    assert!(orphan.threads().is_empty());
    assert!(orphan.pending_items().is_empty());

    Ok(())
}

#[test]
fn test_max_pending_items_from_config() -> anyhow::Result<()> {
    let file = write_snapshot(&second_stop())?;
    let path = file.path().to_string_lossy().into_owned();
    let config = SnapshotConfig::from_lookup(|key| match key {
        "QUEUESCOPE_SNAPSHOT_PATH" => Some(path.clone()),
        "QUEUESCOPE_MAX_PENDING_ITEMS" => Some("2".to_string()),
        _ => None,
    })?;

    let process: Arc<dyn ProcessHandle> = load_process(&config)?;
    let mut queue = Queue::new(&process, QueueId::new(1), None);

    assert_eq!(queue.pending_work_items(), 0);
    assert_eq!(queue.pending_items().len(), 2);

    Ok(())
}
