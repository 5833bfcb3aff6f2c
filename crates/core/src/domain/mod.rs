// Domain Layer - Queue model and the values it carries

pub mod error;
pub mod ids;
pub mod queue;
pub mod queue_list;
pub mod work_item;

// Re-exports
pub use error::DomainError;
pub use ids::{Address, QueueId, ThreadId};
pub use queue::{Queue, QueueKind};
pub use queue_list::QueueList;
pub use work_item::{WorkItem, WorkItemKind};
