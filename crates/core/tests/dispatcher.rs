//! Dispatcher tests against a local axum stand-in for the recommend API.
//!
//! Each test binds an ephemeral port, serves a fixed router, and drives the
//! real reqwest client through `RecommendClient`.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use flickfind_core::client::{GENERIC_SERVER_ERROR, UNSPECIFIED_SERVER_ERROR};
use flickfind_core::{RecommendClient, ResultsList, SearchError, SearchSession, Url};
use serde_json::json;

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/index.html")).unwrap()
}

async fn echo(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let q = params.get("q").cloned().unwrap_or_default();
    let n: usize = params.get("n").and_then(|n| n.parse().ok()).unwrap_or(10);
    let results: Vec<_> = (0..n)
        .map(|i| json!({ "movieId": i, "title": format!("{q} {i} (199{i})"), "distance": 0.1 * i as f64 }))
        .collect();
    Json(json!({ "query": q, "results": results }))
}

fn client_for(page: &Url) -> RecommendClient {
    RecommendClient::for_page(page, "/api").unwrap()
}

#[tokio::test]
async fn success_returns_results_in_server_order() {
    let page = serve(Router::new().route("/api/recommend", get(echo))).await;
    let resp = client_for(&page).recommend("Toy Story", 3).await.unwrap();

    assert_eq!(resp.query.as_deref(), Some("Toy Story"));
    let items = resp.results.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Toy Story 0 (1990)");
    assert_eq!(items[2].movie_id.to_string(), "2");
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let router = Router::new().route(
        "/api/recommend",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "Movie not found" }))) }),
    );
    let page = serve(router).await;
    let err = client_for(&page).recommend("zzzz", 8).await.unwrap_err();
    assert_eq!(err, SearchError::Server { status: 404, message: "Movie not found".into() });
}

#[tokio::test]
async fn non_json_error_body_uses_generic_message() {
    let router = Router::new().route(
        "/api/recommend",
        get(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
    );
    let page = serve(router).await;
    let err = client_for(&page).recommend("heat", 8).await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);
}

#[tokio::test]
async fn json_error_without_message() {
    let router = Router::new().route(
        "/api/recommend",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "boom" }))) }),
    );
    let page = serve(router).await;
    let err = client_for(&page).recommend("heat", 8).await.unwrap_err();
    assert_eq!(err.to_string(), UNSPECIFIED_SERVER_ERROR);
}

#[tokio::test]
async fn unexpected_success_shape_is_passed_through() {
    let router = Router::new().route("/api/recommend", get(|| async { Json(json!({ "ok": true })) }));
    let page = serve(router).await;
    let resp = client_for(&page).recommend("heat", 8).await.unwrap();
    assert!(resp.results.is_none());
}

#[tokio::test]
async fn non_json_success_is_a_decode_error() {
    let router = Router::new().route("/api/recommend", get(|| async { "not json" }));
    let page = serve(router).await;
    let err = client_for(&page).recommend("heat", 8).await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let page = Url::parse(&format!("http://{addr}/")).unwrap();
    let err = client_for(&page).recommend("heat", 8).await.unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn session_round_trip_through_dispatcher() {
    let page = serve(Router::new().route("/api/recommend", get(echo))).await;
    let client = client_for(&page);
    let mut session = SearchSession::new(3, 4);

    session.on_input("alien");
    let request = session.begin_search().unwrap();
    assert_eq!(session.list(), &ResultsList::Skeleton(4));

    let outcome = client.recommend(&request.query, 4).await;
    let done = session.complete(&request, outcome).unwrap();

    assert!(done.reveal);
    assert!(!session.is_busy());
    assert_eq!(session.header(), "4 recommendations for \"alien\"");
    match session.list() {
        ResultsList::Entries(entries) => {
            assert_eq!(entries.len(), 4);
            assert_eq!(entries[0].percent, 100);
            assert_eq!(entries[3].year, "1993");
        }
        other => panic!("expected entries, got {other:?}"),
    }
}
