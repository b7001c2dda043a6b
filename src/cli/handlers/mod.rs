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

use anyhow::{Context, Result};

use crate::cli::StoreArgs;
use crate::config::CoursesConfig;
use crate::graphql::{CourseSchema, build_schema};
use crate::storage::open_store;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: CoursesConfig,
}

impl CommandContext {
    pub fn new(config: CoursesConfig) -> Self {
        Self { config }
    }

    /// Connects to the configured store and builds a schema over it.
    pub async fn schema(&self, store: &StoreArgs) -> Result<CourseSchema> {
        let mut settings = self.config.database.clone();
        if let Some(url) = &store.database_url {
            settings.url = url.clone();
        }

        let store = open_store(&settings, store.in_memory)
            .await
            .context("Failed to connect to the course store")?;
        Ok(build_schema(store))
    }
}

/// Parses `--variables` JSON into GraphQL variables.
fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Executes one request and prints the JSON response.
async fn execute_and_print(schema: &CourseSchema, request: async_graphql::Request) -> Result<()> {
    let response = schema.execute(request).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
