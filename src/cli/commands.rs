use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "courses")]
#[command(
    author,
    version,
    about = "A GraphQL API for managing courses backed by a document store"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for courses.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a courses.yml with default settings in the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "COURSES_PORT")]
        port: Option<u16>,

        /// Address to bind
        #[arg(long, env = "COURSES_HOST")]
        host: Option<String>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}

#[derive(Args, Clone, Default)]
pub struct StoreArgs {
    /// MongoDB connection string (overrides config)
    #[arg(long, env = "COURSES_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep courses in memory instead of MongoDB (any database URL is ignored)
    #[arg(long)]
    pub in_memory: bool,
}
