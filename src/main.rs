use anyhow::{Context, Result};
use clap::Parser;

use usergraph::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use usergraph::cli::{Cli, Commands, ServeOverrides};
use usergraph::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load usergraph configuration")?;

    let serving = matches!(cli.command, Commands::Serve { .. });
    let verbose = cli.verbose || (serving && config.server.debug);
    usergraph::logging::init(verbose, config.logging.file.clone());

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(
            ctx,
            ServeOverrides {
                host,
                port,
                no_graphiql,
            },
        ),
        Commands::Schema => handle_schema(ctx),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
    }
}
