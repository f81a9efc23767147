//! Blocking HTTP transport backed by ureq.

use std::time::Duration;

use todo_report_core::{ApiError, HttpRequest, HttpResponse, Transport};
use tracing::trace;

/// Executes requests with a blocking ureq agent.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
/// come back as data and the core client decides what they mean.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        let mut response = builder.call().map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        trace!(url = %req.url, status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
