//! Data models for usergraph.
//!
//! - [`User`]: a mutable user record with a store-assigned id
//! - [`NewUser`] / [`UserPatch`]: inputs for creating and partially updating users
//! - [`Gender`]: closed male/female enumeration
//! - [`Timestamp`]: microsecond-precision creation time with a fixed text format
//! - [`Character`]: the named contract shared by [`Human`] and [`Droid`]

mod character;
mod timestamp;
mod types;
mod user;

pub use character::{Character, Droid, Human};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
pub use types::Gender;
pub use user::{NewUser, User, UserPatch};
