//! Client library for the Socrates RAG backend: the data model for query
//! results and the service that talks to the HTTP endpoint.

pub mod models;
pub mod query_service;

pub use models::{Answer, QueryResult};
pub use query_service::{QueryService, DEFAULT_TOP_K};
