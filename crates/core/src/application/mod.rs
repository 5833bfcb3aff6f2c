// Application Layer - Per-process queue bookkeeping

pub mod queue_catalog;

// Re-exports
pub use queue_catalog::QueueCatalog;
