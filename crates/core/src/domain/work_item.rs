// Work Item Domain Model

use serde::{Deserialize, Serialize};

use super::ids::{Address, QueueId, ThreadId};

/// How the runtime will invoke a work item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkItemKind {
    #[default]
    Unknown,
    Function,
    Block,
}

impl std::fmt::Display for WorkItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkItemKind::Unknown => write!(f, "UNKNOWN"),
            WorkItemKind::Function => write!(f, "FUNCTION"),
            WorkItemKind::Block => write!(f, "BLOCK"),
        }
    }
}

/// One pending (not yet started) unit of work in a queue
///
/// Immutable once built. Introspectors construct it with [`WorkItem::new`]
/// and the `with_*` methods, then hand it to the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    item_ref: Address,
    #[serde(default)]
    kind: WorkItemKind,
    #[serde(default)]
    invoke_address: Address,

    // Where the item came from, when the runtime recorded it
    #[serde(default)]
    enqueuing_thread: Option<ThreadId>,
    #[serde(default)]
    enqueuing_queue: Option<QueueId>,
    #[serde(default)]
    enqueuing_queue_label: Option<String>,
    #[serde(default)]
    enqueuing_backtrace: Vec<Address>,
    #[serde(default)]
    stop_id: Option<u32>,
}

impl WorkItem {
    /// Create a work item
    ///
    /// # Arguments
    ///
    /// * `item_ref` - Address of the runtime's own work item object
    /// * `kind` - Function or block
    pub fn new(item_ref: Address, kind: WorkItemKind) -> Self {
        Self {
            item_ref,
            kind,
            invoke_address: Address::INVALID,
            enqueuing_thread: None,
            enqueuing_queue: None,
            enqueuing_queue_label: None,
            enqueuing_backtrace: Vec::new(),
            stop_id: None,
        }
    }

    pub fn with_invoke_address(mut self, address: Address) -> Self {
        self.invoke_address = address;
        self
    }

    pub fn with_enqueuing_thread(mut self, thread: ThreadId) -> Self {
        self.enqueuing_thread = Some(thread);
        self
    }

    pub fn with_enqueuing_queue(mut self, queue: QueueId, label: Option<String>) -> Self {
        self.enqueuing_queue = Some(queue);
        self.enqueuing_queue_label = label;
        self
    }

    pub fn with_enqueuing_backtrace(mut self, frames: Vec<Address>) -> Self {
        self.enqueuing_backtrace = frames;
        self
    }

    pub fn with_stop_id(mut self, stop_id: u32) -> Self {
        self.stop_id = Some(stop_id);
        self
    }

    pub fn item_ref(&self) -> Address {
        self.item_ref
    }

    pub fn kind(&self) -> WorkItemKind {
        self.kind
    }

    pub fn invoke_address(&self) -> Address {
        self.invoke_address
    }

    pub fn enqueuing_thread(&self) -> Option<ThreadId> {
        self.enqueuing_thread
    }

    pub fn enqueuing_queue(&self) -> Option<QueueId> {
        self.enqueuing_queue
    }

    pub fn enqueuing_queue_label(&self) -> Option<&str> {
        self.enqueuing_queue_label.as_deref()
    }

    pub fn enqueuing_backtrace(&self) -> &[Address] {
        &self.enqueuing_backtrace
    }

    pub fn stop_id(&self) -> Option<u32> {
        self.stop_id
    }
}
