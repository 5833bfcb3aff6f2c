// Process Port
// The inspected process: owns threads and the runtime introspector

use std::sync::Arc;

use super::runtime_introspector::RuntimeIntrospector;
use super::thread::ThreadHandle;

/// Debugger-side view of the inspected process
///
/// Queues hold this weakly; implementations decide when the process is
/// destroyed or detached by dropping their last `Arc`.
pub trait ProcessHandle: Send + Sync {
    /// Process id in the target OS (for diagnostics)
    fn pid(&self) -> u64;

    /// Counter bumped every time the process stops
    ///
    /// A queue list discovered at one stop id is stale at any other.
    fn stop_id(&self) -> u32;

    /// Current live threads, in the process's own order
    fn threads(&self) -> Vec<Arc<dyn ThreadHandle>>;

    /// Runtime introspection for this process, if the target's runtime is supported
    fn introspector(&self) -> Option<Arc<dyn RuntimeIntrospector>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Mutex, PoisonError};
    /// Mock process with mutable thread set and introspector
    pub struct MockProcess {
        pid: u64,
        stop_id: Mutex<u32>,
        threads: Mutex<Vec<Arc<dyn ThreadHandle>>>,
        introspector: Mutex<Option<Arc<dyn RuntimeIntrospector>>>,
    }
    impl MockProcess {
        pub fn new(pid: u64) -> Arc<Self> {
            Arc::new(Self {
                pid,
                stop_id: Mutex::new(1),
                threads: Mutex::new(Vec::new()),
                introspector: Mutex::new(None),
            })
        }
        pub fn add_thread(&self, thread: Arc<dyn ThreadHandle>) {
            self.threads
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(thread);
        }
        pub fn clear_threads(&self) {
            self.threads
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
        pub fn set_introspector(&self, introspector: Option<Arc<dyn RuntimeIntrospector>>) {
            *self
                .introspector
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = introspector;
        }
        /// Simulate resume + stop
        pub fn stop(&self) {
            *self.stop_id.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        }
    }
    impl ProcessHandle for MockProcess {
        fn pid(&self) -> u64 {
            self.pid
        }
        fn stop_id(&self) -> u32 {
            *self.stop_id.lock().unwrap_or_else(PoisonError::into_inner)
        }
        fn threads(&self) -> Vec<Arc<dyn ThreadHandle>> {
            self.threads
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
        fn introspector(&self) -> Option<Arc<dyn RuntimeIntrospector>> {
            self.introspector
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }
}
