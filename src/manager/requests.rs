//! Detached request halves
//!
//! `LinkManager::begin_*` hands out one of these requests; the caller may
//! `execute` it wherever it likes (inline, or on a spawned task) and feed the
//! outcome back through the matching `apply_*`.

use std::sync::Arc;

use crate::client::{ClientError, CreateLinkRequest, CreatedLink, Link, LinkApi, LinkPage, Stats};
use crate::session::{ListMode, ListQuery, Ticket};

pub struct ListRequest {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) token: String,
    pub(super) ticket: Ticket,
    pub(super) query: ListQuery,
}

#[derive(Debug)]
pub struct ListOutcome {
    pub ticket: Ticket,
    pub page: u32,
    pub result: Result<LinkPage, ClientError>,
}

impl ListRequest {
    pub async fn execute(self) -> ListOutcome {
        let ListQuery { page, limit, mode } = self.query;
        let result = match &mode {
            ListMode::Browse => self.api.list_links(&self.token, page, limit).await,
            ListMode::Search(q) => self.api.search_links(&self.token, q, page, limit).await,
        };
        ListOutcome {
            ticket: self.ticket,
            page,
            result,
        }
    }
}

pub struct StatsRequest {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) token: String,
    pub(super) ticket: Ticket,
}

#[derive(Debug)]
pub struct StatsOutcome {
    pub ticket: Ticket,
    pub result: Result<Stats, ClientError>,
}

impl StatsRequest {
    pub async fn execute(self) -> StatsOutcome {
        StatsOutcome {
            ticket: self.ticket,
            result: self.api.stats(&self.token).await,
        }
    }
}

pub struct CreateRequest {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) token: String,
    pub(super) body: CreateLinkRequest,
}

#[derive(Debug)]
pub struct CreateOutcome {
    pub result: Result<CreatedLink, ClientError>,
}

impl CreateRequest {
    pub fn body(&self) -> &CreateLinkRequest {
        &self.body
    }

    pub async fn execute(self) -> CreateOutcome {
        CreateOutcome {
            result: self.api.create_link(&self.token, &self.body).await,
        }
    }
}

pub struct DeleteRequest {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) token: String,
    pub(super) code: String,
}

#[derive(Debug)]
pub struct DeleteOutcome {
    pub code: String,
    pub result: Result<(), ClientError>,
}

impl DeleteRequest {
    pub async fn execute(self) -> DeleteOutcome {
        let result = self.api.delete_link(&self.token, &self.code).await;
        DeleteOutcome {
            code: self.code,
            result,
        }
    }
}

pub struct DetailRequest {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) token: String,
    pub(super) code: String,
}

#[derive(Debug)]
pub struct DetailOutcome {
    pub code: String,
    pub result: Result<Link, ClientError>,
}

impl DetailRequest {
    pub async fn execute(self) -> DetailOutcome {
        let result = self.api.get_link(&self.token, &self.code).await;
        DetailOutcome {
            code: self.code,
            result,
        }
    }
}
