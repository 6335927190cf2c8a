// src/crtsh/client.rs
use anyhow::{Context, Result};
use tracing::debug;

use super::extract::extract_entries;
use crate::query::build_query_url;
use crate::types::DomainEntry;

/// HTTP client for the crt.sh identity search page
pub struct CrtShClient {
    url_template: String,
    http_client: reqwest::Client,
}

impl CrtShClient {
    /// Create a new client for the given search URL template
    pub fn new(url_template: String, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            url_template,
            http_client,
        })
    }

    /// Fetch the raw results page for a domain
    pub async fn fetch_page(&self, domain: &str) -> Result<String> {
        let url = build_query_url(&self.url_template, domain)?;

        debug!("Querying {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to query {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Search request for {} failed with status {}", domain, response.status());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        debug!("Received {} bytes for {}", body.len(), domain);

        Ok(body)
    }

    /// Fetch and parse the results table for a domain
    pub async fn lookup(&self, domain: &str) -> Result<Vec<DomainEntry>> {
        let page = self.fetch_page(domain).await?;
        Ok(extract_entries(&page))
    }
}
