// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Abstract chat transport consumed by the dialog layer.

use async_trait::async_trait;

use crate::error::BookmatchError;
use crate::types::{Reply, UserId};

/// Outbound side of the chat channel.
///
/// The core never depends on a specific protocol; a transport only needs to
/// deliver text plus an optional keyboard affordance to a user.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a reply in the request/response path of the current event.
    async fn reply(&self, user: UserId, reply: Reply) -> Result<(), BookmatchError>;

    /// Deliver an out-of-band notification (e.g. "you matched") to a user
    /// that did not trigger the current event. Returns whether delivery
    /// succeeded; callers treat failure as degraded, not fatal.
    async fn send_direct(&self, user: UserId, text: &str) -> Result<bool, BookmatchError>;
}
