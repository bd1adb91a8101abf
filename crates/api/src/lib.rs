// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Chain Gateway Server Implementation
//!
//! This crate provides the HTTP server for the chain gateway, built with
//! Axum: token registry search, the 0x swap relay, GoPlus security relays,
//! and Redis-backed intake forms behind one REST surface.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration with hierarchical loading and
//!   validated types
//! - [`error`]: Error types and HTTP response mapping, including verbatim
//!   mirroring of upstream error bodies
//! - [`state`]: Shared application state with cancellation token support
//! - [`server`]: Server lifecycle, upstream-client construction, registry
//!   refresh spawning, and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`extractors`]: JSON extraction with detailed parse errors
//! - [`openapi`]: `OpenAPI` specification and Swagger UI endpoints

pub mod config;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use shared_types::{ChainId, Token};
pub use state::{HealthCheck, ServerState};
