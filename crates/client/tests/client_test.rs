//! End-to-end tests over a scripted transport
//!
//! These drive the full pipeline (filters → signature → dispatch →
//! envelope unwrap) without touching the network.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use url::Url;

use marvel_client::ports::{
    Clock, HttpClient, HttpClientError, HttpResponse, MetricsSink, RequestMetrics,
};
use marvel_client::{
    CancellationToken, CharacterFilters, ClientError, ComicFilters, ComicSortBy, EventFilters,
    MarvelClient, Sort, builder, sign,
};

const OK_CHARACTER_BODY: &str = r#"{
    "code": 200,
    "status": "Ok",
    "data": {
        "offset": 0,
        "limit": 20,
        "total": 1,
        "count": 1,
        "results": [{"id": 1009718, "name": "Spider-Man"}]
    }
}"#;

const OK_EMPTY_BODY: &str =
    r#"{"code": 200, "status": "Ok", "data": {"results": []}}"#;

struct ScriptedHttpClient {
    status: u16,
    body: String,
    requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            status: 200,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn with_status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + 'a>> {
        Box::pin(async move {
            self.requests
                .lock()
                .expect("request log poisoned")
                .push(url.to_string());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        })
    }
}

struct HungHttpClient;

impl HttpClient for HungHttpClient {
    fn get<'a>(
        &'a self,
        _url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + 'a>> {
        Box::pin(std::future::pending())
    }
}

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.0, 0).single().unwrap_or_default()
    }
}

#[derive(Default)]
struct CollectingSink {
    records: Mutex<Vec<RequestMetrics>>,
}

impl MetricsSink for CollectingSink {
    fn record(&self, metrics: &RequestMetrics) {
        self.records
            .lock()
            .expect("metrics log poisoned")
            .push(metrics.clone());
    }
}

fn test_client(http: Arc<dyn HttpClient>) -> MarvelClient {
    builder("pub", "priv")
        .base_url(Url::parse("https://gateway.example.com/v1/public").expect("base url"))
        .http_client(http)
        .clock(Arc::new(FixedClock(1407)))
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn character_by_id_issues_exactly_one_signed_get() {
    let http = ScriptedHttpClient::ok(OK_CHARACTER_BODY);
    let client = test_client(http.clone());

    let heroes = client
        .character(1009718, None)
        .await
        .expect("call should succeed");

    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].id, 1009718);
    assert_eq!(heroes[0].name, "Spider-Man");

    let expected_hash = sign("1407", "priv", "pub");
    assert_eq!(
        http.requests(),
        vec![format!(
            "https://gateway.example.com/v1/public/characters/1009718?ts=1407&hash={expected_hash}"
        )]
    );
}

#[tokio::test]
async fn embedded_error_code_fails_despite_http_success() {
    let http = ScriptedHttpClient::ok(
        r#"{"code": 405, "status": "Method Not Allowed", "data": {"results": []}}"#,
    );
    let client = test_client(http);

    let err = client
        .character(1009718, None)
        .await
        .expect_err("embedded 405 must fail");

    match err {
        ClientError::Api(api) => {
            assert_eq!(api.code, 405);
            assert_eq!(api.status, "Method Not Allowed");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn comic_listing_encodes_variant_flag_and_descending_sort() {
    let http = ScriptedHttpClient::ok(OK_EMPTY_BODY);
    let client = test_client(http.clone());

    let filters = ComicFilters {
        no_variants: Some(true),
        sort: Some(Sort::descending(ComicSortBy::FocDate)),
        ..Default::default()
    };
    let comics = client
        .comics_for_character(1009718, &filters, None)
        .await
        .expect("call should succeed");
    assert!(comics.is_empty());

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let url = &requests[0];
    assert!(url.contains("/characters/1009718/comics?"), "url: {url}");
    assert!(url.contains("noVariants=true"), "url: {url}");
    assert!(url.contains("orderBy=-focdate"), "url: {url}");
}

#[tokio::test]
async fn endpoint_schema_strips_filters_the_endpoint_does_not_accept() {
    let filters = EventFilters {
        name: Some("Onslaught".into()),
        characters: vec![1009718],
        ..Default::default()
    };

    // `characters/{id}/events` does not accept a characters filter.
    let http = ScriptedHttpClient::ok(OK_EMPTY_BODY);
    let client = test_client(http.clone());
    client
        .events_for_character(1009718, &filters, None)
        .await
        .expect("call should succeed");
    let requests = http.requests();
    let url = &requests[0];
    assert!(url.contains("name=Onslaught"), "url: {url}");
    assert!(!url.contains("characters="), "url: {url}");

    // `creators/{id}/events` does.
    let http = ScriptedHttpClient::ok(OK_EMPTY_BODY);
    let client = test_client(http.clone());
    client
        .events_for_creator(30, &filters, None)
        .await
        .expect("call should succeed");
    let requests = http.requests();
    let url = &requests[0];
    assert!(url.contains("characters=1009718"), "url: {url}");
}

#[tokio::test]
async fn non_2xx_status_is_a_transport_failure_not_an_api_error() {
    let http = ScriptedHttpClient::with_status(500, "");
    let client = test_client(http);

    let err = client
        .characters(&CharacterFilters::default(), None)
        .await
        .expect_err("500 must fail");
    assert!(matches!(
        err,
        ClientError::Transport(HttpClientError::Status { status: 500 })
    ));
}

#[tokio::test]
async fn unparseable_body_is_a_malformed_response() {
    let http = ScriptedHttpClient::ok("<html>maintenance</html>");
    let client = test_client(http);

    let err = client
        .characters(&CharacterFilters::default(), None)
        .await
        .expect_err("non-JSON body must fail");
    assert!(matches!(err, ClientError::Malformed(_)));
}

#[tokio::test]
async fn cancelling_an_in_flight_call_resolves_cancelled() {
    let client = test_client(Arc::new(HungHttpClient));
    let token = CancellationToken::new();
    let receiver = token.receiver();

    let pending = tokio::spawn(async move {
        client
            .characters(&CharacterFilters::default(), Some(&receiver))
            .await
    });
    tokio::task::yield_now().await;
    token.cancel();

    let outcome = pending.await.expect("task should finish");
    assert!(matches!(outcome, Err(ClientError::Cancelled)));
}

#[tokio::test]
async fn metrics_sink_observes_status_and_url() {
    let sink = Arc::new(CollectingSink::default());
    let http = ScriptedHttpClient::ok(OK_CHARACTER_BODY);
    let client = builder("pub", "priv")
        .base_url(Url::parse("https://gateway.example.com/v1/public").expect("base url"))
        .http_client(http)
        .clock(Arc::new(FixedClock(1407)))
        .metrics(sink.clone())
        .build()
        .expect("client should build");

    client
        .character(1009718, None)
        .await
        .expect("call should succeed");

    let records = sink.records.lock().expect("metrics log").clone();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, Some(200));
    assert!(records[0].url.contains("/characters/1009718?"));
}
