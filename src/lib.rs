//! # Tree Messages Backend
//!
//! Message board backend for the christmas-tree frontend.
//!
//! Visitors leave a short message for the tree; the frontend fetches the
//! full list and hangs each message as an ornament. The backend exposes a
//! single REST resource (`/api/message`) backed by a relational table.
//!
//! ## Architecture
//!
//! The crate is organized into a small number of layers:
//!
//! - [`models`]: domain types (`Message`, `MessageId`)
//! - [`db`]: repository pattern and persistence backends
//! - [`http`]: axum-based HTTP server, handlers, and the CORS access policy
//!
//! Requests flow HTTP layer -> service layer -> repository. The repository
//! trait has two implementations: a Diesel/SQLite backend for durable
//! storage and an in-memory backend for tests and local development.

// Allow large error types - RepositoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
