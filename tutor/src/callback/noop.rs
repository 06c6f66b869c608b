//! No-op hooks, used when a run has tracing enabled but no sink configured.

use async_trait::async_trait;

use super::hooks::RunHooks;

/// A [`RunHooks`] implementation that does nothing.
///
/// All methods are inherited from the trait defaults (empty bodies).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunHooks;

#[async_trait]
impl RunHooks for NoopRunHooks {}
