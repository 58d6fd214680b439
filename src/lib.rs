//! # usergraph - a small in-memory GraphQL service
//!
//! Serves a list of users, plus read-only humans and droids, over GraphQL.
//! All data lives in process memory, is seeded at startup and is lost on exit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 127.0.0.1:5001 (GraphiQL at /graphql, SDL at /schema)
//! usergraph serve
//!
//! # One-off query against a freshly seeded store
//! usergraph query '{ user(id: 3) { id name age gender createdAt } }'
//!
//! # Create a user
//! usergraph mutate 'createUser(name: "Alice", age: 30, gender: MALE) { ok user { id } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User, Gender, Timestamp, Human, Droid)
//! - [`storage`]: The in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.usergraph.yml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// GraphQL schema, resolvers and the axum server.
pub mod graphql;

pub mod logging;

/// Data models.
pub mod model;

/// In-memory store seeded at startup.
pub mod storage;
