use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};

use super::CourseSchema;

/// Path serving both the GraphQL endpoint and the GraphiQL explorer.
pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(schema: CourseSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(schema)
}

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Runs `?query=` requests; a bare GET opens GraphiQL.
async fn graphql_get(State(schema): State<CourseSchema>, RawQuery(raw): RawQuery) -> Response {
    let Some(raw) = raw.filter(|q| !q.is_empty()) else {
        return graphiql().into_response();
    };
    let request = match parse_query_string(&raw) {
        Ok(request) => request,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    if request.query.is_empty() {
        return graphiql().into_response();
    }
    if selects_mutation(&request) {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            "Mutations can only be sent with POST",
        )
            .into_response();
    }

    execute(&schema, request).await.into_response()
}

async fn graphql_post(State(schema): State<CourseSchema>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&schema, req.into_inner()).await
}

async fn execute(schema: &CourseSchema, request: async_graphql::Request) -> GraphQLResponse {
    tracing::debug!(operation = ?request.operation_name, "Executing GraphQL request");
    schema.execute(request).await.into()
}

/// Whether the operation the request would run is a mutation.
///
/// Unparseable documents return `false` and are left to the executor to report.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    document
        .operations
        .iter()
        .filter(|(name, _)| match (&request.operation_name, name) {
            (Some(wanted), Some(name)) => name.as_str() == wanted.as_str(),
            (Some(_), None) => false,
            (None, _) => true,
        })
        .any(|(_, op)| op.node.ty == OperationType::Mutation)
}

/// Serves the schema until Ctrl-C is received.
pub async fn run_server(schema: CourseSchema, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(port, "Server running on port {}", port);

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str) -> async_graphql::Request {
        async_graphql::Request::new(query)
    }

    #[test]
    fn test_selects_mutation_anonymous() {
        assert!(selects_mutation(&request("mutation { deleteCourse(id: \"x\") { id } }")));
        assert!(!selects_mutation(&request("{ courses { id } }")));
    }

    #[test]
    fn test_selects_mutation_by_operation_name() {
        let document = "query List { courses { id } } mutation Drop { deleteCourse(id: \"x\") { id } }";

        let list = request(document).operation_name("List");
        assert!(!selects_mutation(&list));

        let drop = request(document).operation_name("Drop");
        assert!(selects_mutation(&drop));
    }

    #[test]
    fn test_selects_mutation_unparseable() {
        assert!(!selects_mutation(&request("mutation {")));
    }
}
