use anyhow::Result;
use colored::Colorize;

use crate::cli::StoreArgs;
use crate::graphql::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    port: Option<u16>,
    host: Option<String>,
    store: StoreArgs,
) -> Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());

    tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema(&store).await?;

        println!(
            "{} GraphQL server on http://{}:{}{}",
            "Starting".green(),
            host,
            port,
            GRAPHQL_PATH
        );
        println!("GraphiQL: http://localhost:{}{}", port, GRAPHQL_PATH);

        run_server(schema, &host, port).await?;
        Ok(())
    })
}
