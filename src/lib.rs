//! Pipecheck - HTTP validation service for pipeline DAGs

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod validator;

pub use config::ServerConfig;
pub use error::PipecheckError;
pub use pipeline::{Edge, Node, Pipeline, PipelineReport};
