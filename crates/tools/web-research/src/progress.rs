//! Coarse-grained progress reporting for orchestration workflows.

use tracing::info;

/// Sink for coarse progress updates.
///
/// Workflows report `step` out of `total` at their documented step
/// boundaries, in order; implementations must not assume any other call
/// pattern.
pub trait Progress: Send + Sync {
    /// Record that `step` of `total` steps have completed.
    fn report(&self, step: u32, total: u32);
}

/// Progress sink that logs each step via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn report(&self, step: u32, total: u32) {
        info!("progress: {step}/{total}");
    }
}
