//! Client layer for the pipemon monitor.
//!
//! Owns configuration loading, the credential interface, the REST transport
//! to the orchestration service, and the concurrent dual fetch used by
//! pipeline comparison. Everything network-facing sits behind the
//! [`PipelineService`] trait so callers can be tested with a fake service.

pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod transport;

pub use auth::{EnvCredential, StaticCredential, TokenCredential};
pub use config::FactoryConfig;
pub use error::{ClientError, ClientResult};
pub use fetch::fetch_pair;
pub use transport::{HttpPipelineService, PipelineService};
