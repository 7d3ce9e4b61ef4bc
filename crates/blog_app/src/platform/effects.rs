use std::sync::{mpsc, Arc};

use blog_core::{Article, Effect, Msg};
use blog_engine::{ApiArticle, EngineError, EngineEvent, EngineHandle, EventSink, FetchSettings};
use blog_logging::blog_info;

use super::app::LoopEvent;

/// Executes controller effects.
pub trait EffectExecutor {
    fn execute(&mut self, effects: Vec<Effect>);
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Starts the engine; its results come back as `LoopEvent::Msg` on `msg_tx`.
    pub fn new(settings: FetchSettings, msg_tx: mpsc::Sender<LoopEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx: msg_tx }))?;
        Ok(Self { engine })
    }
}

impl EffectExecutor for EffectRunner {
    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, page } => {
                    blog_info!("FetchPage request_id={} page={}", request_id, page);
                    self.engine.fetch(request_id, page);
                }
            }
        }
    }
}

struct MsgSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(LoopEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            page,
            result: Ok(articles),
        } => Msg::ArticlesLoaded {
            request_id,
            page,
            articles: articles.into_iter().map(map_article).collect(),
        },
        EngineEvent::FetchCompleted {
            request_id,
            page,
            result: Err(err),
        } => Msg::FetchFailed {
            request_id,
            page,
            message: err.to_string(),
        },
    }
}

fn map_article(article: ApiArticle) -> Article {
    Article {
        title: article.title,
        description: article.description,
        cover_image: article.social_image,
        author: article.user.name,
        published: article.readable_publish_date,
        tags: article.tag_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_engine::{ApiUser, FailureKind, FetchError};
    use pretty_assertions::assert_eq;

    #[test]
    fn completed_fetch_maps_wire_fields() {
        let msg = map_event(EngineEvent::FetchCompleted {
            request_id: 3,
            page: 2,
            result: Ok(vec![ApiArticle {
                title: "Title".to_string(),
                description: "Desc".to_string(),
                social_image: "https://img".to_string(),
                readable_publish_date: "Feb 2".to_string(),
                tag_list: vec!["rust".to_string()],
                user: ApiUser {
                    name: "Lana Steiner".to_string(),
                },
            }]),
        });

        assert_eq!(
            msg,
            Msg::ArticlesLoaded {
                request_id: 3,
                page: 2,
                articles: vec![Article {
                    title: "Title".to_string(),
                    description: "Desc".to_string(),
                    cover_image: "https://img".to_string(),
                    author: "Lana Steiner".to_string(),
                    published: "Feb 2".to_string(),
                    tags: vec!["rust".to_string()],
                }],
            }
        );
    }

    #[test]
    fn failed_fetch_carries_message() {
        let msg = map_event(EngineEvent::FetchCompleted {
            request_id: 4,
            page: 5,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "Failed to fetch posts (http status 500)".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::FetchFailed {
                request_id: 4,
                page: 5,
                message: "Failed to fetch posts (http status 500)".to_string(),
            }
        );
    }
}
