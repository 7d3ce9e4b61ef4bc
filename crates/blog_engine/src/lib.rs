//! Blog engine: dev.to client and effect execution.
mod api;
mod engine;
mod fetch;
mod types;

pub use api::{ApiArticle, ApiUser};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{ArticleFetcher, FetchSettings, ReqwestArticleFetcher, DEV_TO_ARTICLES_URL};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, RequestId};
