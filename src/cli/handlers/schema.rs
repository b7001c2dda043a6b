use anyhow::Result;
use std::sync::Arc;

use crate::graphql::build_schema;
use crate::storage::InMemoryStore;

/// Prints the SDL; the store backing the schema is never queried.
pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(InMemoryStore::new()));
    print!("{}", schema.sdl());
    Ok(())
}
