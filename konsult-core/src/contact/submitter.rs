//! Submission backends
//!
//! The form flow only needs one asynchronous call with a single resolution,
//! so the endpoint sits behind [`ContactSubmitter`] and tests inject doubles.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::config::SiteConfig;
use crate::error::{CoreError, CoreResult};

use super::form::ContactPayload;

/// Delivers a contact message
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Send one message; no response payload is consumed
    async fn submit(&self, payload: &ContactPayload) -> CoreResult<()>;
}

/// Waits for a fixed delay and reports success
///
/// Stands in for a form backend until one is configured.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> CoreResult<()> {
        log::debug!(
            "Simulating submission from {} ({} chars)",
            payload.email,
            payload.message.chars().count()
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Posts the message as JSON to a form backend (Formspree, Netlify Forms, ...)
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(endpoint: Url) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("konsult/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> CoreResult<()> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Form endpoint responded {status}");

        if status.is_success() {
            Ok(())
        } else {
            Err(CoreError::SubmissionFailed(format!("HTTP {}", status.as_u16())))
        }
    }
}

/// Pick the backend described by the configuration
///
/// No endpoint means simulated delivery.
pub fn build_submitter(config: &SiteConfig) -> CoreResult<Arc<dyn ContactSubmitter>> {
    match &config.submit_endpoint {
        Some(endpoint) => {
            log::info!("Contact form posts to {endpoint}");
            Ok(Arc::new(HttpSubmitter::new(endpoint.clone())?))
        }
        None => {
            log::info!("No form endpoint configured, submissions are simulated");
            Ok(Arc::new(SimulatedSubmitter::new(Duration::from_millis(
                config.simulated_delay_ms,
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            company: String::new(),
            message: "Hello".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::default();
        let start = tokio::time::Instant::now();

        submitter.submit(&payload()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn builds_http_backend_when_endpoint_is_set() {
        let config = SiteConfig {
            submit_endpoint: Some(Url::parse("https://formspree.io/f/abc").unwrap()),
            ..SiteConfig::default()
        };
        assert!(build_submitter(&config).is_ok());
    }
}
