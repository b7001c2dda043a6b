use anyhow::{Context, Result};
use clap::Parser;

use courses::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use courses::cli::{Cli, Commands};
use courses::config::CoursesConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    courses::logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Schema => handle_schema(),
        Commands::Serve { port, host, store } => {
            let ctx = CommandContext::new(load_config(cli.config)?);
            handle_serve(ctx, port, host, store)
        }
        Commands::Query {
            query,
            variables,
            store,
        } => {
            let ctx = CommandContext::new(load_config(cli.config)?);
            handle_query(ctx, query, variables, store)
        }
        Commands::Mutate {
            mutation,
            variables,
            store,
        } => {
            let ctx = CommandContext::new(load_config(cli.config)?);
            handle_mutate(ctx, mutation, variables, store)
        }
    }
}

fn load_config(path: Option<std::path::PathBuf>) -> Result<CoursesConfig> {
    let config = match path {
        Some(path) => CoursesConfig::load(&path),
        None => CoursesConfig::discover(&std::env::current_dir()?),
    };
    config.context("Failed to load courses configuration")
}
