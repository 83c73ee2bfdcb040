//! REST transport to the orchestration service.
//!
//! [`PipelineService`] is the narrow interface the rest of the monitor
//! depends on; [`HttpPipelineService`] implements it against the managed
//! API. Each call is a billable remote request; no caching or retry happens
//! at this layer.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pipemon_types::{PipelineDefinition, PipelineRun};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::TokenCredential;
use crate::config::FactoryConfig;
use crate::error::{ClientError, ClientResult};

const MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";
const API_VERSION: &str = "2018-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote interface to the pipeline orchestration service.
#[async_trait]
pub trait PipelineService: Send + Sync {
    /// Fetch one named pipeline definition.
    async fn get_pipeline(&self, name: &str) -> ClientResult<PipelineDefinition>;

    /// List every pipeline definition in the factory.
    async fn list_pipelines(&self) -> ClientResult<Vec<PipelineDefinition>>;

    /// Query run history for the last `n_days` days (1..=30), optionally
    /// restricted server-side to one exact pipeline name.
    async fn query_runs(
        &self,
        n_days: i64,
        name_filter: Option<&str>,
    ) -> ClientResult<Vec<PipelineRun>>;
}

/// REST implementation against the managed data-factory API.
pub struct HttpPipelineService {
    http: reqwest::Client,
    config: FactoryConfig,
    credential: Arc<dyn TokenCredential>,
    endpoint: String,
}

impl HttpPipelineService {
    /// Build a service scoped to one factory. The per-request timeout means
    /// a hung fetch cannot block a comparison indefinitely.
    pub fn new(config: FactoryConfig, credential: Arc<dyn TokenCredential>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            config,
            credential,
            endpoint: MANAGEMENT_ENDPOINT.to_string(),
        })
    }

    /// Point the service at a different endpoint (tests, sovereign clouds).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn factory_url(&self, suffix: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.DataFactory/factories/{}/{}?api-version={}",
            self.endpoint,
            self.config.subscription_id,
            self.config.resource_group,
            self.config.factory_name,
            suffix,
            API_VERSION,
        )
    }
}

#[async_trait]
impl PipelineService for HttpPipelineService {
    async fn get_pipeline(&self, name: &str) -> ClientResult<PipelineDefinition> {
        let token = self.credential.token().await?;
        let url = self.factory_url(&format!("pipelines/{name}"));
        tracing::debug!(pipeline = name, "fetching pipeline definition");

        let response = self.http.get(&url).bearer_auth(&token).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: Value = response.json().await?;
            Ok(PipelineDefinition::new(name, body))
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::PipelineNotFound {
                name: name.to_string(),
            })
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(ClientError::PermissionDenied(name.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn list_pipelines(&self) -> ClientResult<Vec<PipelineDefinition>> {
        let token = self.credential.token().await?;
        let mut url = self.factory_url("pipelines");
        let mut pipelines = Vec::new();

        // The list endpoint pages; follow nextLink until it runs out.
        loop {
            tracing::debug!(%url, "listing pipelines");
            let response = self.http.get(&url).bearer_auth(&token).send().await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(ClientError::PermissionDenied("pipelines".to_string()));
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: PipelineListPage = response.json().await?;
            for resource in page.value {
                let name = resource
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                pipelines.push(PipelineDefinition::new(name, resource));
            }

            match page.next_link {
                Some(next) if !next.is_empty() => url = next,
                _ => break,
            }
        }

        Ok(pipelines)
    }

    async fn query_runs(
        &self,
        n_days: i64,
        name_filter: Option<&str>,
    ) -> ClientResult<Vec<PipelineRun>> {
        if !(1..=30).contains(&n_days) {
            return Err(ClientError::InvalidRunWindow(n_days));
        }

        let token = self.credential.token().await?;
        let url = self.factory_url("queryPipelineRuns");
        let filter = run_filter(Utc::now(), n_days, name_filter);
        tracing::debug!(days = n_days, "querying pipeline runs");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&filter)
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::PermissionDenied("queryPipelineRuns".to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let page: RunQueryPage = response.json().await?;
        Ok(page.value.into_iter().map(PipelineRun::from).collect())
    }
}

/// Build the run-query request body. The upper bound is widened by a day so
/// runs from today are included regardless of timezone skew between the
/// monitor and the service.
fn run_filter(now: DateTime<Utc>, n_days: i64, name_filter: Option<&str>) -> Value {
    let mut filter = json!({
        "lastUpdatedAfter": now - chrono::Duration::days(n_days),
        "lastUpdatedBefore": now + chrono::Duration::days(1),
    });
    if let Some(name) = name_filter {
        filter["filters"] = json!([{
            "operand": "PipelineName",
            "operator": "Equals",
            "values": [name],
        }]);
    }
    filter
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipelineListPage {
    #[serde(default)]
    value: Vec<Value>,
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryPage {
    #[serde(default)]
    value: Vec<WireRun>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRun {
    run_id: String,
    pipeline_name: String,
    status: String,
    run_start: DateTime<Utc>,
    run_end: Option<DateTime<Utc>>,
    // Absent while the run is still in flight.
    duration_in_ms: Option<i64>,
}

impl From<WireRun> for PipelineRun {
    fn from(wire: WireRun) -> Self {
        Self {
            run_id: wire.run_id,
            pipeline_name: wire.pipeline_name,
            status: wire.status.into(),
            run_start: wire.run_start,
            run_end: wire.run_end,
            duration_ms: wire.duration_in_ms.unwrap_or(0),
        }
    }
}
