use anyhow::Result;

use crate::cli::StoreArgs;

use super::{CommandContext, execute_and_print, parse_variables};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    store: StoreArgs,
) -> Result<()> {
    let vars = parse_variables(variables)?;

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    let request = async_graphql::Request::new(query).variables(vars);

    tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema(&store).await?;
        execute_and_print(&schema, request).await
    })
}
