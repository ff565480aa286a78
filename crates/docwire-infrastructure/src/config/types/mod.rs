//! Configuration types module

pub mod app;
pub mod kernel;
pub mod logging;

// Re-export main types
pub use app::*;
pub use kernel::KernelConfig;
pub use logging::LoggingConfig;
