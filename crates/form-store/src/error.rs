// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the form store

use thiserror::Error;

/// Errors that can occur when storing or listing forms
#[derive(Debug, Error)]
pub enum FormStoreError {
    /// Submitted form failed validation
    #[error("invalid form: {0}")]
    Validation(String),

    /// Redis command or connection failure
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Stored document could not be serialized or deserialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
