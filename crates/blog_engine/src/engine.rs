use std::sync::{mpsc, Arc};
use std::thread;

use blog_logging::{blog_debug, blog_info, blog_warn};

use crate::fetch::{ArticleFetcher, FetchSettings, ReqwestArticleFetcher};
use crate::{EngineError, EngineEvent, RequestId};

/// Receiver of engine events. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch { request_id: RequestId, page: u32 },
}

/// Runs page fetches on a background tokio runtime.
///
/// Fetches are neither deduplicated nor cancelled: every enqueued request
/// runs to completion and reports through the sink.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let fetcher = ReqwestArticleFetcher::new(settings).map_err(EngineError::Client)?;
        Self::with_fetcher(Arc::new(fetcher), sink)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn ArticleFetcher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("blog-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, sink.as_ref()).await;
                });
            }
            blog_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, page: u32) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, page })
            .is_err()
        {
            blog_warn!("engine stopped; dropping fetch request_id={request_id} page={page}");
        }
    }
}

async fn handle_command(fetcher: &dyn ArticleFetcher, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch { request_id, page } => {
            let result = fetcher.fetch_page(page).await;
            match &result {
                Ok(articles) => blog_info!(
                    "fetch done request_id={} page={} articles={}",
                    request_id,
                    page,
                    articles.len()
                ),
                Err(err) => blog_warn!(
                    "fetch failed request_id={} page={} kind={}: {}",
                    request_id,
                    page,
                    err.kind,
                    err.message
                ),
            }
            sink.emit(EngineEvent::FetchCompleted {
                request_id,
                page,
                result,
            });
        }
    }
}
