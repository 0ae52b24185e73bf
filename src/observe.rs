//! Observability collaborator passed down from process start
//!
//! Components report through an [`Observer`] handed to them at construction
//! instead of reaching for a global logger. The production implementation
//! forwards to `tracing`.

use std::error::Error;
use std::sync::Arc;

/// Sink for informational and failure events
pub trait Observer: Send + Sync {
    /// Records an informational event
    fn info(&self, msg: &str);

    /// Records a failure together with its cause
    fn error(&self, msg: &str, cause: &(dyn Error + 'static));
}

/// Shared handle to an observer
pub type SharedObserver = Arc<dyn Observer>;

/// Observer that emits `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Returns a shared handle suitable for passing to components
    pub fn shared() -> SharedObserver {
        Arc::new(Self)
    }
}

impl Observer for TracingObserver {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str, cause: &(dyn Error + 'static)) {
        tracing::error!(error = %cause, "{}", msg);
    }
}
