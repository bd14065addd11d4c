//! HTTP routes for the validation service
//!
//! Two endpoints: a root liveness ping and the pipeline parse route.
//! Malformed or mis-shaped JSON is rejected by the extractor before the
//! validator runs; a panicking handler is translated into a 500 with a
//! JSON detail body.

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::PipecheckError;
use crate::pipeline::{Pipeline, PipelineReport};
use crate::validator;

/// Build the complete router for the service
pub fn router(config: &ServerConfig) -> Result<Router, PipecheckError> {
    Ok(Router::new()
        .route("/", get(read_root))
        .route("/pipelines/parse", post(parse_pipeline))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic)))
}

/// GET / - static liveness payload
async fn read_root() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

/// POST /pipelines/parse - validate a pipeline and report counts + acyclicity
async fn parse_pipeline(Json(pipeline): Json<Pipeline>) -> Json<PipelineReport> {
    let report = validator::validate(&pipeline);
    debug!(
        num_nodes = report.num_nodes,
        num_edges = report.num_edges,
        is_dag = report.is_dag,
        "parsed pipeline"
    );
    Json(report)
}

/// CORS policy for the pipeline-building frontend
///
/// Wildcard origin cannot carry credentials, so `*` switches to the
/// permissive non-credentialed mode.
fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, PipecheckError> {
    if config.cors_origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| PipecheckError::InvalidOrigin {
                origin: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Map an escaped panic to a 500 with a textual detail message
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected internal error".to_string()
    };
    tracing::error!(detail = %detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": detail })),
    )
        .into_response()
}
