//! HTTP-level tests of the stats route through the axum router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use webstats_core::{Environment, StatsRegistry};
use webstats_gateway::app_state::{AppState, REJECTED_STAT, REQUESTS_STAT};
use webstats_gateway::{config, router};

struct FixedEnv;

impl Environment for FixedEnv {
    fn now_epoch_secs(&self) -> u64 {
        1_700_000_123
    }
    fn hostname(&self) -> String {
        "stats-host".into()
    }
}

const CONFIG: &str = r#"
version: 1
monitor:
  local_ip: "10.0.0.1"
  port: 9669
  role: "storaged"
stats:
  seed:
    - { name: "num_queries", value: 42 }
"#;

fn state(yaml: &str) -> AppState {
    let cfg = config::load_from_str(yaml).unwrap();
    AppState::with_environment(cfg, Box::new(FixedEnv)).unwrap()
}

fn app() -> (AppState, Router) {
    let st = state(CONFIG);
    (st.clone(), router::build_router(st))
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Option<String>, String) {
    send_body(app, method, uri, Body::from("ignored body")).await
}

async fn send_body(
    app: Router,
    method: &str,
    uri: &str,
    body: Body,
) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn json_with_unknown_metric() {
    let (_, app) = app();
    let (status, ct, body) = send(app, "GET", "/stats?format=json&stats=num_queries,unknown_metric").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("application/json"));
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        v,
        json!([{"num_queries": 42}, {"unknown_metric": "stat not found: unknown_metric"}])
    );
}

#[tokio::test]
async fn monitor_payload() {
    let (_, app) = app();
    let (status, _, body) = send(app, "GET", "/stats?format=monitor&stats=num_queries").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["timestamp"], 1_700_000_100u64);
    assert_eq!(v[0]["endpoint"], "10.0.0.1:9669");
    assert_eq!(v[0]["value"], 42);
    assert_eq!(
        v[0]["tags"],
        "project=nebula,city=jd,ip_port=10.0.0.1:9669,module=storaged,type=num_queries"
    );
}

#[tokio::test]
async fn plain_lists_all_stats() {
    let (_, app) = app();
    let (status, ct, body) = send(app, "GET", "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("text/plain; charset=utf-8"));
    // the in-flight request is counted once the response is built
    assert_eq!(
        body,
        "num_queries=42\nwebstats.requests=0\nwebstats.requests_rejected=0\n"
    );
}

#[tokio::test]
async fn post_is_405_with_empty_body() {
    let (st, app) = app();
    let (status, _, body) = send(app, "POST", "/stats?format=json").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.is_empty());
    assert_eq!(st.stats().read_one(REQUESTS_STAT).unwrap(), 1);
    assert_eq!(st.stats().read_one(REJECTED_STAT).unwrap(), 1);
}

#[tokio::test]
async fn malformed_query_is_ignored() {
    let (_, app) = app();
    let (status, _, body) = send(app, "GET", "/stats?stats=num_queries&%zz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("num_queries=42\n"));
}

#[tokio::test]
async fn bad_local_ip_is_body_of_200() {
    let st = state("version: 1\nmonitor: { local_ip: \"300.0.0.1\" }\n");
    let app = router::build_router(st);
    let (status, _, body) = send(app, "GET", "/stats?format=monitor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "`300.0.0.1' is not a valid ip");
}

#[tokio::test]
async fn configured_stats_path_and_healthz() {
    let st = state("version: 1\ngateway: { stats_path: \"/get_stats\" }\n");
    let app = router::build_router(st);
    let (status, _, _) = send(app.clone(), "GET", "/get_stats").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send(app.clone(), "GET", "/stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, body) = send(app, "GET", "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

// over axum's default 2 MiB body limit
const OVERSIZED_BODY: usize = 3 * 1024 * 1024;

#[tokio::test]
async fn oversized_post_is_still_405() {
    let (st, app) = app();
    let body = Body::from(vec![b'x'; OVERSIZED_BODY]);
    let (status, _, body) = send_body(app, "POST", "/stats", body).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.is_empty());
    assert_eq!(st.stats().read_one(REJECTED_STAT).unwrap(), 1);
}

#[tokio::test]
async fn oversized_get_body_is_ignored() {
    let (_, app) = app();
    let body = Body::from(vec![b'x'; OVERSIZED_BODY]);
    let (status, _, body) = send_body(app, "GET", "/stats?stats=num_queries", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "num_queries=42\n");
}
