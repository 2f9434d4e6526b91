//! HTTP implementation of [`LinkApi`] on top of ureq
//!
//! ureq is blocking, so every call runs inside `spawn_blocking`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use ureq::http::Response;
use ureq::{Agent, Body};
use url::Url;

use super::types::{ApiErrorBody, CreateLinkRequest, CreatedLink, Link, LinkPage, Stats};
use super::{ClientError, LinkApi};
use crate::config::ApiConfig;
use crate::errors::{LinkdeckError, Result};

/// Link API client over HTTP + JSON
#[derive(Clone)]
pub struct HttpLinkApi {
    base_url: Url,
    agent: Agent,
}

impl HttpLinkApi {
    /// Build a client from the `[api]` config section.
    ///
    /// `timeout_secs = None` leaves ureq without a global timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(LinkdeckError::config(format!(
                "base URL cannot carry paths: {}",
                config.base_url
            )));
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(config.timeout_secs.map(Duration::from_secs))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { base_url, agent })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/<segments...>`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn paged_endpoint(&self, segments: &[&str], query: Option<&str>, page: u32, limit: u32) -> Url {
        let mut url = self.endpoint(segments);
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(q) = query {
                pairs.append_pair("q", q);
            }
            pairs
                .append_pair("page", &page.to_string())
                .append_pair("limit", &limit.to_string());
        }
        url
    }

    /// Run a blocking request on the blocking pool
    async fn run_blocking<T, F>(&self, request: F) -> std::result::Result<T, ClientError>
    where
        T: Send + 'static,
        F: FnOnce(Agent) -> std::result::Result<T, ClientError> + Send + 'static,
    {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || request(agent))
            .await
            .map_err(|e| ClientError::network_or_parse(format!("request task failed: {}", e)))?
    }

    async fn get_json<T>(&self, url: Url, token: &str) -> std::result::Result<T, ClientError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let auth = bearer(token);
        debug!("GET {}", url);
        self.run_blocking(move |agent| {
            let response = agent
                .get(url.as_str())
                .header("Authorization", auth)
                .call()?;
            decode_json(response)
        })
        .await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Read the body, mapping non-2xx statuses to `RequestFailed`
fn read_body(response: Response<Body>) -> std::result::Result<String, ClientError> {
    let status = response.status();
    let body = response.into_body().read_to_string();

    if status.is_success() {
        return Ok(body?);
    }

    let message = body
        .ok()
        .and_then(|text| serde_json::from_str::<ApiErrorBody>(&text).ok())
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    trace!("HTTP {} error body message: {:?}", status.as_u16(), message);
    Err(ClientError::request_failed(status.as_u16(), message))
}

fn decode_json<T: DeserializeOwned>(response: Response<Body>) -> std::result::Result<T, ClientError> {
    let text = read_body(response)?;
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn list_links(
        &self,
        token: &str,
        page: u32,
        limit: u32,
    ) -> std::result::Result<LinkPage, ClientError> {
        let url = self.paged_endpoint(&["links"], None, page, limit);
        self.get_json(url, token).await
    }

    async fn search_links(
        &self,
        token: &str,
        query: &str,
        page: u32,
        limit: u32,
    ) -> std::result::Result<LinkPage, ClientError> {
        let url = self.paged_endpoint(&["links", "search"], Some(query), page, limit);
        self.get_json(url, token).await
    }

    async fn get_link(&self, token: &str, code: &str) -> std::result::Result<Link, ClientError> {
        let url = self.endpoint(&["links", code]);
        self.get_json(url, token).await
    }

    async fn stats(&self, token: &str) -> std::result::Result<Stats, ClientError> {
        let url = self.endpoint(&["stats"]);
        self.get_json(url, token).await
    }

    async fn create_link(
        &self,
        token: &str,
        request: &CreateLinkRequest,
    ) -> std::result::Result<CreatedLink, ClientError> {
        let url = self.endpoint(&["links"]);
        let auth = bearer(token);
        let body = request.clone();
        debug!("POST {}", url);
        self.run_blocking(move |agent| {
            let response = agent
                .post(url.as_str())
                .header("Authorization", auth)
                .send_json(&body)?;
            decode_json(response)
        })
        .await
    }

    async fn delete_link(&self, token: &str, code: &str) -> std::result::Result<(), ClientError> {
        let url = self.endpoint(&["links", code]);
        let auth = bearer(token);
        debug!("DELETE {}", url);
        self.run_blocking(move |agent| {
            let response = agent
                .delete(url.as_str())
                .header("Authorization", auth)
                .call()?;
            // 成功响应体内容无关紧要
            read_body(response).map(|_| ())
        })
        .await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
