//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use tally_api::{create_app, create_app_state};
use tally_common::AppConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on the memory backend
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// GET `path` and return status and body text
    pub async fn get_text(&self, path: &str) -> Result<(StatusCode, String)> {
        let url = format!("{}{}", self.base_url(), path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        Ok((status, response.text().await?))
    }

    /// GET `path` with query parameters and return the body text
    pub async fn get_query(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}{}", self.base_url(), path);
        let response = self.client.get(&url).query(query).send().await?;
        Ok(response.text().await?)
    }

    /// Cast a vote and return the body text
    pub async fn vote(&self, user: &str, msg: &str) -> Result<String> {
        self.get_query("/vote", &[("user", user), ("msg", msg)]).await
    }

    /// Cast `n` votes for `msg`, each from a different voter
    pub async fn vote_many(&self, msg: &str, n: usize) -> Result<()> {
        for i in 0..n {
            self.vote(&format!("{msg}-voter-{i}"), msg).await?;
        }
        Ok(())
    }

    /// Stop the server task
    pub fn stop(self) {
        self.handle.abort();
    }
}

/// Configuration for tests: defaults plus `overrides`, ignoring the process
/// environment.
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = overrides
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Ok(AppConfig::from_lookup(|key| vars.get(key).cloned())?)
}
