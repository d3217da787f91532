//! The only boundary to the remote analysis service.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::domain::AnalysisResult;
use crate::error::{AppError, Result};

/// Remote analysis operations consumed by the workspace.
///
/// Futures are not required to be `Send`: the workspace runs on a single
/// cooperative event loop, including in the browser.
#[async_trait(?Send)]
pub trait Gateway {
    /// Submits `url` for analysis. Failures are always `AppError::Analysis`.
    async fn analyze(&self, url: &str) -> Result<AnalysisResult>;

    /// Fetches every stored result. Failures are always `AppError::Fetch`.
    async fn list_results(&self) -> Result<Vec<AnalysisResult>>;
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        let endpoint = self.config.endpoint("analyze");
        tracing::info!("[GATEWAY] Submitting {} for analysis", url);

        let response = self
            .client
            .post(&endpoint)
            .json(&AnalyzeRequest { url })
            .send()
            .await
            .map_err(|e| AppError::analysis(e.to_string()))?;

        let response = ensure_success(response).await.map_err(AppError::analysis)?;
        let result: AnalysisResult = response
            .json()
            .await
            .map_err(|e| AppError::analysis(e.to_string()))?;

        tracing::debug!("[GATEWAY] Analysis of {} finished: {:?}", url, result.title);
        Ok(result.with_url_fallback(url))
    }

    async fn list_results(&self) -> Result<Vec<AnalysisResult>> {
        let endpoint = self.config.endpoint("results");
        tracing::info!("[GATEWAY] Fetching all results");

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| AppError::fetch(e.to_string()))?;

        let response = ensure_success(response).await.map_err(AppError::fetch)?;
        let results: Vec<AnalysisResult> = response
            .json()
            .await
            .map_err(|e| AppError::fetch(e.to_string()))?;

        tracing::debug!("[GATEWAY] Received {} results", results.len());
        Ok(results)
    }
}

/// Passes 2xx responses through; otherwise returns the best message found.
async fn ensure_success(response: Response) -> std::result::Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!("[GATEWAY] Request failed with {}: {}", status, body);
    Err(error_detail(&body).unwrap_or_else(|| status_message(status)))
}

fn status_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}

/// Pulls the structured `detail` out of an error body.
///
/// FastAPI-style services send either a plain string or, for request
/// validation failures, an array of `{msg, ...}` objects.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;

    let message = match detail {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => return None,
        other => other.to_string(),
    };

    (!message.trim().is_empty()).then_some(message)
}
