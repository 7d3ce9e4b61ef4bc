use std::sync::{mpsc, Arc};
use std::time::Duration;

use blog_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FailureKind, FetchSettings,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    blog_logging::initialize_for_tests();
}

fn page_body(title: &str) -> String {
    format!(r#"[{{"title":"{title}","user":{{"name":"Ada"}},"tag_list":["rust"]}}]"#)
}

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        api_base_url: format!("{}/api/articles", server.uri()),
        ..FetchSettings::default()
    }
}

fn next_event(rx: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("engine event within timeout")
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_completion_with_request_id() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("page", "9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(page_body("nine"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let engine =
        EngineHandle::new(settings_for(&server), Arc::new(ChannelEventSink::new(tx))).expect("engine");
    engine.fetch(7, 9);

    let event = tokio::task::spawn_blocking(move || next_event(&rx))
        .await
        .expect("join");
    let EngineEvent::FetchCompleted {
        request_id,
        page,
        result,
    } = event;
    assert_eq!(request_id, 7);
    assert_eq!(page, 9);
    let articles = result.expect("articles");
    assert_eq!(articles[0].title, "nine");
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_does_not_cancel_superseded_requests() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_raw(page_body("slow one"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let engine =
        EngineHandle::new(settings_for(&server), Arc::new(ChannelEventSink::new(tx))).expect("engine");
    engine.fetch(1, 1);
    engine.fetch(2, 2);

    let events = tokio::task::spawn_blocking(move || vec![next_event(&rx), next_event(&rx)])
        .await
        .expect("join");

    // The fast failure for page 2 lands first; the stale page 1 still arrives.
    let order: Vec<_> = events
        .iter()
        .map(|EngineEvent::FetchCompleted { request_id, .. }| *request_id)
        .collect();
    assert_eq!(order, vec![2, 1]);

    let EngineEvent::FetchCompleted { result, .. } = &events[0];
    assert_eq!(
        result.as_ref().unwrap_err().kind,
        FailureKind::HttpStatus(503)
    );
}
