// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait shared by long-lived infrastructure adapters.

use async_trait::async_trait;

use crate::error::BookmatchError;
use crate::types::HealthStatus;

/// Identity, health, and lifecycle for infrastructure adapters
/// (storage backends, chat transports).
#[async_trait]
pub trait Adapter: Send + Sync + 'static {
    /// Human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, BookmatchError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), BookmatchError>;
}
