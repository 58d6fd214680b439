use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::parser::parse_query;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::{Result, UserGraphError};

use super::schema::UserGraphSchema;

pub const GRAPHQL_PATH: &str = "/graphql";
pub const SCHEMA_PATH: &str = "/schema";

const MUTATION_OVER_GET: &str = "Can only perform a mutation operation from a POST request.";

#[derive(Clone)]
pub struct ServerState {
    pub schema: UserGraphSchema,
    pub graphiql: bool,
}

pub fn router(schema: UserGraphSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .route(SCHEMA_PATH, get(schema_sdl))
        .with_state(ServerState { schema, graphiql })
}

pub async fn graphql_post(
    State(state): State<ServerState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Executes a request carried in the query string, or serves the GraphiQL
/// explorer when there is none.
pub async fn graphql_get(
    State(state): State<ServerState>,
    RawQuery(raw): RawQuery,
) -> Response {
    match raw.filter(|q| !q.is_empty()) {
        Some(raw) => match parse_query_string(&raw) {
            Ok(request) => match operation_type(&request) {
                Some(OperationType::Mutation | OperationType::Subscription) => {
                    tracing::debug!("Rejected mutation over GET");
                    (StatusCode::METHOD_NOT_ALLOWED, MUTATION_OVER_GET).into_response()
                }
                _ => GraphQLResponse::from(state.schema.execute(request).await).into_response(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "Rejected GET request");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
        },
        None if state.graphiql => {
            Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Type of the operation the request would run. `None` when the document
/// does not parse or the operation cannot be selected; execution reports
/// those cases itself.
fn operation_type(request: &async_graphql::Request) -> Option<OperationType> {
    let document = parse_query(&request.query).ok()?;
    match document.operations {
        DocumentOperations::Single(op) => Some(op.node.ty),
        DocumentOperations::Multiple(ops) => match request.operation_name.as_deref() {
            Some(name) => ops
                .iter()
                .find(|(op_name, _)| op_name.as_str() == name)
                .map(|(_, op)| op.node.ty),
            None if ops.len() == 1 => ops.values().next().map(|op| op.node.ty),
            None => None,
        },
    }
}

pub async fn schema_sdl(State(state): State<ServerState>) -> String {
    state.schema.sdl()
}

/// Serve until Ctrl-C.
pub async fn run_server(schema: UserGraphSchema, settings: &ServerSettings) -> Result<()> {
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| UserGraphError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, graphiql = settings.graphiql, "GraphQL server listening");

    axum::serve(listener, router(schema, settings.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
