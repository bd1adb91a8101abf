// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Redis-backed storage for intake forms
//!
//! Forms are stored as JSON documents in a Redis hash keyed by a generated
//! id, with a separate list preserving insertion order. A small settings
//! blob is bootstrapped on first connect so the frontend always has
//! something to render.

mod error;
mod forms;
mod store;

pub use error::FormStoreError;
pub use forms::{FormRecord, NewForm, PAGE_SIZE};
pub use store::{FormStore, FormStoreConfig};
