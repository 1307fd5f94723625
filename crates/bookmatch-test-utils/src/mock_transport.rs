// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat transport for deterministic testing.
//!
//! `MockTransport` implements `ChatTransport`, capturing replies and direct
//! sends for assertion in tests. Direct-send delivery failures can be
//! injected to exercise the degraded-notification path.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use bookmatch_core::{BookmatchError, ChatTransport, Reply, UserId};

/// A mock chat transport that records everything sent through it.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<Vec<(UserId, Reply)>>,
    direct: Mutex<Vec<(UserId, String)>>,
    fail_direct: AtomicBool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `send_direct` calls report delivery failure.
    pub fn fail_direct_sends(&self, fail: bool) {
        self.fail_direct.store(fail, Ordering::SeqCst);
    }

    /// All replies sent so far, in order.
    pub async fn replies(&self) -> Vec<(UserId, Reply)> {
        self.replies.lock().await.clone()
    }

    /// Texts of all replies addressed to `user`, in order.
    pub async fn reply_texts(&self, user: UserId) -> Vec<String> {
        self.replies
            .lock()
            .await
            .iter()
            .filter(|(to, _)| *to == user)
            .map(|(_, reply)| reply.text.clone())
            .collect()
    }

    /// The most recent reply addressed to `user`.
    pub async fn last_reply(&self, user: UserId) -> Option<Reply> {
        self.replies
            .lock()
            .await
            .iter()
            .rev()
            .find(|(to, _)| *to == user)
            .map(|(_, reply)| reply.clone())
    }

    /// All direct (out-of-band) sends so far.
    pub async fn direct_messages(&self) -> Vec<(UserId, String)> {
        self.direct.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.replies.lock().await.clear();
        self.direct.lock().await.clear();
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn reply(&self, user: UserId, reply: Reply) -> Result<(), BookmatchError> {
        self.replies.lock().await.push((user, reply));
        Ok(())
    }

    async fn send_direct(&self, user: UserId, text: &str) -> Result<bool, BookmatchError> {
        if self.fail_direct.load(Ordering::SeqCst) {
            return Ok(false);
        }
        self.direct.lock().await.push((user, text.to_string()));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_replies_in_order() {
        let transport = MockTransport::new();
        transport.reply(UserId(1), Reply::text("first")).await.unwrap();
        transport.reply(UserId(1), Reply::text("second")).await.unwrap();
        transport.reply(UserId(2), Reply::text("other")).await.unwrap();

        assert_eq!(transport.reply_texts(UserId(1)).await, ["first", "second"]);
        assert_eq!(transport.last_reply(UserId(1)).await.unwrap().text, "second");
    }

    #[tokio::test]
    async fn injected_direct_failure_reports_undelivered() {
        let transport = MockTransport::new();
        assert!(transport.send_direct(UserId(1), "hi").await.unwrap());

        transport.fail_direct_sends(true);
        assert!(!transport.send_direct(UserId(1), "lost").await.unwrap());
        assert_eq!(transport.direct_messages().await.len(), 1);
    }
}
