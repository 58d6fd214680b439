mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::AppConfig;
use crate::graphql::{UserGraphSchema, build_schema};
use crate::storage::UserStore;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
}

impl CommandContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Seed a fresh store from the config and build a schema over it.
    pub fn seeded_schema(&self) -> UserGraphSchema {
        build_schema(UserStore::seed(&self.config.seed).into_shared())
    }
}
