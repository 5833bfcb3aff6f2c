// Queuescope Infrastructure - Snapshot Adapters
// Implements: ProcessHandle, ThreadHandle, RuntimeIntrospector over a recorded process

pub mod config;
pub mod introspector_impl;
pub mod process_impl;
pub mod snapshot;
pub mod telemetry;

pub use config::{LogFormat, SnapshotConfig};
pub use introspector_impl::SnapshotIntrospector;
pub use process_impl::{load_process, SnapshotProcess, SnapshotThread};
pub use snapshot::{ProcessSnapshot, QueueRecord, ThreadRecord};
