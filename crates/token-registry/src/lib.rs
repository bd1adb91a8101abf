// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! In-process token registry for the chain gateway
//!
//! This crate owns the only stateful, concurrency-relevant logic in the
//! gateway:
//!
//! - **[`registry::TokenRegistry`]** - per-chain token collections, replaced
//!   wholesale by background refresh tasks and read concurrently by search
//!   requests. Each collection is held behind an `Arc` and swapped in a
//!   single map-entry assignment, so a reader observes either the pre- or
//!   the post-refresh collection, never a mix.
//! - **[`rotation::KeyRotator`]** - fair round-robin selection among the API
//!   keys of a quota-limited upstream. Rotation is for quota distribution,
//!   not failure recovery: the cursor advances on every selection regardless
//!   of what the call does with the key.
//! - **[`refresh`]** - fire-and-forget population tasks, one per chain with
//!   an external token-list source. A failed refresh is logged and swallowed,
//!   leaving the previous collection in place.

pub mod refresh;
pub mod registry;
pub mod rotation;

pub use refresh::{TokenSource, spawn_refresh_all};
pub use registry::{SEARCH_RESULT_CAP, TokenRegistry};
pub use rotation::{KeyRotator, KeyRotatorError};
