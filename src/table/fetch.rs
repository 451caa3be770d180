use std::path::Path;
use std::time::Instant;

use reqwest::header::USER_AGENT;
use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::metrics::PipelineMetrics;

/// Source of the museums page HTML
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP GET with a browser-like user agent.
///
/// A fresh client is built per fetch: nothing about the page is cached and
/// the blocking client must not be created or dropped on an async worker.
pub struct HttpPageFetcher {
    user_agent: String,
}

impl HttpPageFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        info!(url, "Fetching museums page");
        let started = Instant::now();

        let client = reqwest::blocking::Client::new();
        let response = client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .map_err(|e| {
                PipelineMetrics::record_fetch_error();
                PipelineError::Http(e)
            })?;

        if !response.status().is_success() {
            warn!(url, status = %response.status(), "Museums page request failed");
            PipelineMetrics::record_fetch_error();
            return Err(PipelineError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text()?;
        PipelineMetrics::record_fetch_success(started.elapsed().as_secs_f64(), body.len());
        Ok(body)
    }
}

/// Serves a fixed page regardless of URL; used for saved pages and tests
#[derive(Debug, Clone)]
pub struct StaticPageFetcher {
    html: String,
}

impl StaticPageFetcher {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }
}

impl PageFetcher for StaticPageFetcher {
    fn fetch(&self, _url: &str) -> Result<String> {
        Ok(self.html.clone())
    }
}
