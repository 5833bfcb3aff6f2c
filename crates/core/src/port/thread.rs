// Thread Port

use crate::domain::{QueueId, ThreadId};

/// Debugger-side view of one thread in the target process
pub trait ThreadHandle: Send + Sync {
    fn id(&self) -> ThreadId;

    /// Queue this thread is servicing right now, if any
    fn queue_id(&self) -> Option<QueueId>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex, PoisonError};
    /// Mock thread whose queue association can change between queries
    pub struct MockThread {
        id: ThreadId,
        queue_id: Mutex<Option<QueueId>>,
    }
    impl MockThread {
        pub fn new(id: ThreadId, queue_id: Option<QueueId>) -> Arc<Self> {
            Arc::new(Self {
                id,
                queue_id: Mutex::new(queue_id),
            })
        }
        pub fn set_queue_id(&self, queue_id: Option<QueueId>) {
            *self.queue_id.lock().unwrap_or_else(PoisonError::into_inner) = queue_id;
        }
    }
    impl ThreadHandle for MockThread {
        fn id(&self) -> ThreadId {
            self.id
        }
        fn queue_id(&self) -> Option<QueueId> {
            *self.queue_id.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
