//! Shared in-memory link service for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use linkdeck::client::{
    ClientError, CreateLinkRequest, CreatedLink, Link, LinkApi, LinkPage, Stats,
};

#[derive(Default)]
pub struct FakeApi {
    pub links: Mutex<Vec<Link>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_list: Mutex<Option<ClientError>>,
    pub fail_stats: Mutex<Option<ClientError>>,
    pub fail_create: Mutex<Option<ClientError>>,
    pub fail_delete: Mutex<Option<ClientError>>,
    /// Reported `page` overriding the requested one
    pub served_page: Mutex<Option<u32>>,
}

impl FakeApi {
    pub fn with_links(n: usize) -> Arc<Self> {
        let links = (0..n)
            .map(|i| Link {
                code: format!("c{}", i),
                original_url: format!("https://example.com/{}", i),
                click_count: i as u64,
                ..Link::default()
            })
            .collect();
        Arc::new(Self {
            links: Mutex::new(links),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn page(&self, links: Vec<Link>, page: u32, limit: u32) -> LinkPage {
        let served = self.served_page.lock().unwrap().unwrap_or(page);
        LinkPage {
            page: served,
            ..Self::slice(links, page, limit)
        }
    }

    fn slice(links: Vec<Link>, page: u32, limit: u32) -> LinkPage {
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

#[async_trait]
impl LinkApi for FakeApi {
    async fn list_links(&self, token: &str, page: u32, limit: u32) -> Result<LinkPage, ClientError> {
        self.record(format!("list {} {} {}", token, page, limit));
        if let Some(e) = self.fail_list.lock().unwrap().clone() {
            return Err(e);
        }
        let links = self.links.lock().unwrap().clone();
        Ok(self.page(links, page, limit))
    }

    async fn search_links(
        &self,
        _token: &str,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<LinkPage, ClientError> {
        self.record(format!("search {} {}", query, page));
        let found = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.original_url.contains(query))
            .cloned()
            .collect();
        Ok(self.page(found, page, limit))
    }

    async fn get_link(&self, _token: &str, code: &str) -> Result<Link, ClientError> {
        self.record(format!("get {}", code));
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
            .ok_or_else(|| ClientError::request_failed(404, Some("link not found".into())))
    }

    async fn stats(&self, _token: &str) -> Result<Stats, ClientError> {
        self.record("stats".into());
        if let Some(e) = self.fail_stats.lock().unwrap().clone() {
            return Err(e);
        }
        let links = self.links.lock().unwrap();
        Ok(Stats {
            total_links: links.len() as u64,
            total_clicks: links.iter().map(|l| l.click_count).sum(),
            today_clicks: 1,
            top_links: links.iter().take(1).cloned().collect(),
        })
    }

    async fn create_link(
        &self,
        _token: &str,
        request: &CreateLinkRequest,
    ) -> Result<CreatedLink, ClientError> {
        self.record(format!("create {} {:?}", request.url, request.code));
        if let Some(e) = self.fail_create.lock().unwrap().clone() {
            return Err(e);
        }
        let code = request.code.clone().unwrap_or_else(|| "gen".into());
        self.links.lock().unwrap().insert(
            0,
            Link {
                code: code.clone(),
                original_url: request.url.clone(),
                ..Link::default()
            },
        );
        Ok(CreatedLink {
            short_url: format!("https://s.example/{}", code),
            code,
            original_url: request.url.clone(),
        })
    }

    async fn delete_link(&self, _token: &str, code: &str) -> Result<(), ClientError> {
        self.record(format!("delete {}", code));
        if let Some(e) = self.fail_delete.lock().unwrap().clone() {
            return Err(e);
        }
        self.links.lock().unwrap().retain(|l| l.code != code);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
