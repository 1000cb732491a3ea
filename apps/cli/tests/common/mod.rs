//! Shared test utilities for integration tests.
//!
//! Provides a local mock of the Wordnik v4 API serving fixed fixtures:
//! - `serendipity` has data on every endpoint
//! - `ghost` exists but has no definitions or examples
//! - `boom` fails with a server error
//! - any other word is unknown (404)

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::{
    extract::{Path as UrlPath, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const API_KEY: &str = "test-key";

/// Mock Wordnik server bound to a random local port.
pub struct MockWordnik {
    pub url: String,
    handle: JoinHandle<()>,
}

impl MockWordnik {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/v4/account.json/apiTokenStatus", get(token_status))
            .route("/v4/word.json/:word/:resource", get(word_resource));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            url: format!("http://{}/v4", addr),
            handle,
        }
    }
}

impl Drop for MockWordnik {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Write a fixture file into `dir`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

type Reply = (StatusCode, Json<Value>);

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("api_key").map(String::as_str) == Some(API_KEY)
}

fn unauthorized() -> Reply {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid authentication credentials" })),
    )
}

async fn token_status(Query(params): Query<HashMap<String, String>>) -> Reply {
    if !authorized(&params) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "valid": true,
            "token": API_KEY,
            "resetsInMillis": 3_723_000,
            "remainingCalls": 14_999,
            "expiresInMillis": 0,
            "totalRequests": 1
        })),
    )
}

async fn word_resource(
    UrlPath((word, resource)): UrlPath<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    if !authorized(&params) {
        return unauthorized();
    }

    let body = match (word.as_str(), resource.as_str()) {
        ("boom", _) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "backend exploded" })),
            )
        }
        ("serendipity", "definitions") => json!([
            { "text": "The faculty of making fortunate discoveries by accident; luck.", "partOfSpeech": "noun" },
            { "partOfSpeech": "noun" }
        ]),
        ("serendipity", "examples") => json!({
            "examples": [
                { "text": "It was pure serendipity." },
                { "text": "Serendipity struck twice." },
                { "text": "A third serendipity." }
            ]
        }),
        ("serendipity", "phrases") => json!([
            { "gram1": "pure", "gram2": "serendipity", "mi": 10.2 },
            { "gram1": "serendipity" }
        ]),
        ("serendipity", "pronunciations") => json!([
            { "raw": "(sĕr′ən-dĭp′ĭ-tē)", "rawType": "ahd-5" },
            { "raw": "second" }
        ]),
        ("ghost", "examples") => json!({}),
        ("ghost", _) => json!([]),
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "word not found" })),
            )
        }
    };

    (StatusCode::OK, Json(body))
}
