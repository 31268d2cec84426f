use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use recommender_server::{build_app, load_corpus, DEFAULT_QUERY};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;

fn build_tiny_corpus(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("articles.csv");
    fs::write(
        &path,
        "ID,title,text,link\n\
         1,Auto Insurance Basics,What your policy covers,https://help.example/auto\n\
         2,Health Insurance Plans,Choosing a plan,https://help.example/health\n\
         3,Car Maintenance Tips,Keep it running,https://help.example/car\n\
         4,General Insurance Topics,Start here,https://help.example/general\n",
    )
    .unwrap();
    path
}

fn app() -> Router {
    let dir = tempdir().unwrap();
    let corpus = load_corpus(build_tiny_corpus(dir.path())).unwrap();
    build_app(corpus, DEFAULT_QUERY.to_string())
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn recommend_returns_ranked_articles() {
    let (status, json) = call(app(), "/recommend?query=car%20insurance&num=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["utterance"], "car insurance");
    let arr = json["result"]["articles"].as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["rank"], 1);
    assert_eq!(arr[0]["title"], "Car Maintenance Tips");
    assert_eq!(arr[0]["link"], "https://help.example/car");
    assert_eq!(arr[1]["rank"], 2);
    assert!(arr[0]["score"].as_f64().unwrap() >= arr[1]["score"].as_f64().unwrap());
}

#[tokio::test]
async fn blank_query_uses_default_phrase() {
    let (status, json) = call(app(), "/recommend?query=%27%27").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["utterance"], DEFAULT_QUERY);
    let arr = json["result"]["articles"].as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["title"], "General Insurance Topics");
}

#[tokio::test]
async fn out_of_range_count_is_bad_request() {
    let (status, json) = call(app(), "/recommend?query=car&num=25").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("25"));
}

#[tokio::test]
async fn documents_are_served_by_id() {
    let (status, json) = call(app(), "/documents/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Health Insurance Plans");
    let (status, _) = call(app(), "/documents/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
