//! Background request execution
//!
//! Every API call runs on its own tokio task and reports back over an mpsc
//! channel. The event loop drains the channel between key presses and hands
//! each [`ApiEvent`] to the app.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

use crate::manager::{
    CreateOutcome, CreateRequest, DeleteOutcome, DeleteRequest, DetailOutcome, DetailRequest,
    ListOutcome, ListRequest, StatsOutcome, StatsRequest,
};

/// Finished request
#[derive(Debug)]
pub enum ApiEvent {
    List(ListOutcome),
    Stats(StatsOutcome),
    Create(CreateOutcome),
    Delete(DeleteOutcome),
    Detail(DetailOutcome),
}

#[derive(Clone)]
pub struct TaskRunner {
    tx: UnboundedSender<ApiEvent>,
}

impl TaskRunner {
    pub fn new() -> (Self, UnboundedReceiver<ApiEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(tx: &UnboundedSender<ApiEvent>, event: ApiEvent) {
        // 接收端已关闭说明界面正在退出
        if tx.send(event).is_err() {
            debug!("TUI closed, dropping request result");
        }
    }

    pub fn list(&self, request: ListRequest) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = request.execute().await;
            Self::send(&tx, ApiEvent::List(outcome));
        });
    }

    pub fn stats(&self, request: StatsRequest) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = request.execute().await;
            Self::send(&tx, ApiEvent::Stats(outcome));
        });
    }

    pub fn create(&self, request: CreateRequest) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = request.execute().await;
            Self::send(&tx, ApiEvent::Create(outcome));
        });
    }

    pub fn delete(&self, request: DeleteRequest) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = request.execute().await;
            Self::send(&tx, ApiEvent::Delete(outcome));
        });
    }

    pub fn detail(&self, request: DetailRequest) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = request.execute().await;
            Self::send(&tx, ApiEvent::Detail(outcome));
        });
    }
}
