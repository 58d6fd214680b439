use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let response = execute(&ctx, &query, variables)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Run one request against a freshly seeded store.
pub(super) fn execute(
    ctx: &CommandContext,
    query: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let schema = ctx.seeded_schema();

    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}
