//! GraphQL schema, resolvers and HTTP surface for usergraph.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql, SDL on GET /schema)
//! usergraph serve --port 5001
//!
//! # Execute a query against a freshly seeded store
//! usergraph query '{ users { id name age gender createdAt } }'
//!
//! # Execute a mutation
//! usergraph mutate 'createUser(name: "Alice", age: 30, gender: MALE) { ok user { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `user`, `users`, `human`, `droid`, `character`
//! - **Mutations**: `createUser`, `updateUser`

mod scalars;
mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, UserGraphSchema, build_schema};
pub use server::{GRAPHQL_PATH, SCHEMA_PATH, ServerState, router, run_server};
pub use types::*;
