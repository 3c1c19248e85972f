pub mod entities;
pub mod mock;

// Re-export tracing for use in this crate
pub use tracing;
