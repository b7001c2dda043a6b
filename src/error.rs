use async_graphql::ErrorExtensions;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CoursesError {
    #[error("Course validation failed: {field} is required")]
    Validation { field: &'static str },

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Store error while trying to {operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CoursesError {
    pub fn store(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Store {
            operation,
            source: source.into(),
        }
    }

    /// Machine-readable code reported in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store { .. } => "STORE_ERROR",
            Self::Config(_) | Self::Io(_) | Self::Yaml(_) => "INTERNAL_ERROR",
        }
    }

    /// Converts into a GraphQL error carrying `extensions.code`.
    ///
    /// The error itself is kept as the GraphQL error's source, so the
    /// underlying store failure stays reachable from the response.
    pub fn into_graphql(self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new_with_source(self).extend_with(|_, e| e.set("code", code.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, CoursesError>;
