// Public modules
pub mod error;
pub mod pipeline;
pub mod toolchain;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use pipeline::{ReleasePipeline, ReleaseRun};
pub use toolchain::Toolchain;
