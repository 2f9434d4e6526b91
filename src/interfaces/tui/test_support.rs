//! In-memory [`LinkApi`] for TUI tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

use super::app::App;
use super::tasks::{ApiEvent, TaskRunner};
use crate::client::{
    ClientError, CreateLinkRequest, CreatedLink, Link, LinkApi, LinkPage, Stats,
};
use crate::manager::LinkManager;
use crate::session::{DEFAULT_PAGE_LIMIT, Session};

pub struct StubApi {
    links: Mutex<Vec<Link>>,
    fail_status: Option<u16>,
}

impl StubApi {
    pub fn with_links(links: Vec<Link>) -> Self {
        Self {
            links: Mutex::new(links),
            fail_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            fail_status: Some(status),
        }
    }

    fn check(&self) -> Result<(), ClientError> {
        match self.fail_status {
            Some(status) => Err(ClientError::request_failed(status, None)),
            None => Ok(()),
        }
    }

    fn page_of(links: Vec<Link>, page: u32, limit: u32) -> LinkPage {
        let total = links.len() as u64;
        let total_pages = (links.len() as u32).div_ceil(limit);
        let start = ((page.max(1) - 1) * limit) as usize;
        LinkPage {
            links: links.into_iter().skip(start).take(limit as usize).collect(),
            total,
            page,
            limit,
            total_pages,
        }
    }
}

pub fn sample_links(n: usize) -> Vec<Link> {
    (0..n)
        .map(|i| Link {
            code: format!("code{}", i),
            original_url: format!("https://example.com/{}", i),
            click_count: i as u64,
            created_at: "2024-01-01T00:00:00".into(),
            ..Link::default()
        })
        .collect()
}

pub fn test_app(api: StubApi) -> (App, UnboundedReceiver<ApiEvent>) {
    let manager = LinkManager::new(Arc::new(api), Session::new("token", DEFAULT_PAGE_LIMIT));
    let (runner, rx) = TaskRunner::new();
    (App::new(manager, runner), rx)
}

#[async_trait]
impl LinkApi for StubApi {
    async fn list_links(
        &self,
        _token: &str,
        page: u32,
        limit: u32,
    ) -> Result<LinkPage, ClientError> {
        self.check()?;
        let links = self.links.lock().unwrap().clone();
        Ok(Self::page_of(links, page, limit))
    }

    async fn search_links(
        &self,
        _token: &str,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<LinkPage, ClientError> {
        self.check()?;
        let links: Vec<Link> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.code.contains(query) || l.original_url.contains(query))
            .cloned()
            .collect();
        Ok(Self::page_of(links, page, limit))
    }

    async fn get_link(&self, _token: &str, code: &str) -> Result<Link, ClientError> {
        self.check()?;
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
            .ok_or_else(|| ClientError::request_failed(404, Some("not found".into())))
    }

    async fn stats(&self, _token: &str) -> Result<Stats, ClientError> {
        self.check()?;
        let links = self.links.lock().unwrap();
        Ok(Stats {
            total_links: links.len() as u64,
            total_clicks: links.iter().map(|l| l.click_count).sum(),
            today_clicks: 0,
            top_links: Vec::new(),
        })
    }

    async fn create_link(
        &self,
        _token: &str,
        request: &CreateLinkRequest,
    ) -> Result<CreatedLink, ClientError> {
        self.check()?;
        let code = request.code.clone().unwrap_or_else(|| "gen1".to_string());
        self.links.lock().unwrap().insert(
            0,
            Link {
                code: code.clone(),
                original_url: request.url.clone(),
                title: request.title.clone(),
                ..Link::default()
            },
        );
        Ok(CreatedLink {
            short_url: format!("http://s/{}", code),
            code,
            original_url: request.url.clone(),
        })
    }

    async fn delete_link(&self, _token: &str, code: &str) -> Result<(), ClientError> {
        self.check()?;
        self.links.lock().unwrap().retain(|l| l.code != code);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
