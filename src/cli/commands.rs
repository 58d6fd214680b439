use crate::config::ServerSettings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "usergraph")]
#[command(
    author,
    version,
    about = "A small in-memory GraphQL service for users, humans and droids"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .usergraph.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .usergraph.yml in the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, env = "USERGRAPH_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "USERGRAPH_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Print the schema in SDL form
    Schema,

    /// Execute a GraphQL query against a freshly seeded store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
}

impl ServeOverrides {
    pub fn apply(self, settings: &mut ServerSettings) {
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if self.no_graphiql {
            settings.graphiql = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_config() {
        let mut settings = ServerSettings::default();
        ServeOverrides {
            host: Some("0.0.0.0".to_string()),
            port: Some(9000),
            no_graphiql: true,
        }
        .apply(&mut settings);

        assert_eq!(settings.bind_addr(), "0.0.0.0:9000");
        assert!(!settings.graphiql);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut settings = ServerSettings::default();
        ServeOverrides::default().apply(&mut settings);
        assert_eq!(settings, ServerSettings::default());
    }

    #[test]
    fn test_cli_parses_serve() {
        let cli = Cli::try_parse_from(["usergraph", "serve", "--port", "4000"]).unwrap();
        match cli.command {
            Commands::Serve { port, host, .. } => {
                assert_eq!(port, Some(4000));
                assert!(host.is_none() || std::env::var("USERGRAPH_HOST").is_ok());
            }
            _ => panic!("expected serve"),
        }
    }
}
