use crate::cli::ServeOverrides;
use crate::graphql::{GRAPHQL_PATH, SCHEMA_PATH, run_server};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, overrides: ServeOverrides) -> Result<()> {
    overrides.apply(&mut ctx.config.server);
    let settings = ctx.config.server.clone();
    let schema = ctx.seeded_schema();

    let base = format!("http://{}", settings.bind_addr());
    println!("{} {}{}", "GraphQL:".green(), base, GRAPHQL_PATH);
    if settings.graphiql {
        println!("{} {}{}", "GraphiQL:".green(), base, GRAPHQL_PATH);
    }
    println!("{} {}{}", "Schema:".green(), base, SCHEMA_PATH);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
