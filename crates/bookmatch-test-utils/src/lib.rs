// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic test doubles for the bookmatch workspace.

pub mod mock_transport;

pub use mock_transport::MockTransport;
