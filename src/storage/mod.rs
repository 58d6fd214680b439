//! In-memory storage for usergraph.
//!
//! Everything lives in process memory and is scanned linearly; nothing is
//! persisted. A [`UserStore`] is seeded once at startup and shared with the
//! GraphQL layer through a [`SharedStore`] handle.
//!
//! ## Components
//!
//! - [`UserStore`]: lookups plus the create/update operations on users
//! - [`SharedStore`]: `Arc<RwLock<UserStore>>` handed to resolvers

mod memory_store;
mod seed;

pub use memory_store::{SharedStore, UserStore};
pub use seed::{seed_droids, seed_humans, seed_users};
