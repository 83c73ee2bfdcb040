//! Credential interface for the management-plane API.
//!
//! The real credential provider (CLI login, managed identity, …) is an
//! external concern. The transport only needs a bearer token, so this is
//! the whole surface it consumes.

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the management-plane bearer token.
pub const ENV_ACCESS_TOKEN: &str = "PIPEMON_ACCESS_TOKEN";

/// Source of bearer tokens for the orchestration service.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    async fn token(&self) -> ClientResult<String>;
}

/// Reads the token from the environment on each request.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvCredential;

#[async_trait]
impl TokenCredential for EnvCredential {
    async fn token(&self) -> ClientResult<String> {
        match std::env::var(ENV_ACCESS_TOKEN) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ClientError::MissingCredential(ENV_ACCESS_TOKEN)),
        }
    }
}

/// Fixed token, for tests and local tooling.
#[derive(Clone, Debug)]
pub struct StaticCredential(pub String);

#[async_trait]
impl TokenCredential for StaticCredential {
    async fn token(&self) -> ClientResult<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_credential_returns_its_token() {
        let cred = StaticCredential("tok-1".to_string());
        assert_eq!(cred.token().await.unwrap(), "tok-1");
    }

    #[tokio::test]
    async fn env_credential_reports_missing_token() {
        std::env::remove_var(ENV_ACCESS_TOKEN);
        let err = EnvCredential.token().await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCredential(_)));
    }
}
