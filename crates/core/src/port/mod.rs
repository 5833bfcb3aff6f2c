// Port Layer - Interfaces to the debugger's process model and runtime walkers

pub mod process;
pub mod runtime_introspector;
pub mod thread;

// Re-exports
pub use process::ProcessHandle;
pub use runtime_introspector::RuntimeIntrospector;
pub use thread::ThreadHandle;

/// Test doubles for every port
pub mod mocks {
    pub use super::process::mocks::MockProcess;
    pub use super::runtime_introspector::mocks::MockIntrospector;
    pub use super::thread::mocks::MockThread;
}
