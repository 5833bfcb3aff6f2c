// Queuescope Core - Queue Model & Introspection Ports
// NO target-memory access here: walking the runtime lives behind RuntimeIntrospector

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
