//! The `reqwest` transport and typed client against a local axum server.

use std::{collections::HashMap, net::SocketAddr, time::Duration};

use apidemo_core::{
    ApiClient, ApiError, Endpoints, HttpRequest, ReqwestTransport, Transport, UserId,
};
use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn user(Path(id): Path<u32>) -> Result<Json<Value>, StatusCode> {
    if id != 1 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "id": 1,
        "name": "Leanne Graham",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org"
    })))
}

async fn todos(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let user_id: u64 = params.get("userId").and_then(|v| v.parse().ok()).unwrap_or(0);
    let items: Vec<Value> = (1..=user_id)
        .map(|n| json!({ "userId": user_id, "id": n, "title": format!("todo {n}"), "completed": n % 2 == 0 }))
        .collect();
    Json(Value::Array(items))
}

async fn echo_query(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!(params))
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/users/{id}", get(user))
        .route("/todos", get(todos))
        .route("/echo", get(echo_query))
        .route("/broken", get(|| async { "this is not json" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(Duration::from_secs(5)).unwrap()
}

fn client_for(addr: SocketAddr) -> ApiClient<ReqwestTransport> {
    let endpoints = Endpoints { fake_api: format!("http://{addr}"), ..Endpoints::default() };
    ApiClient::new(&endpoints, transport()).unwrap()
}

#[tokio::test]
async fn query_pairs_are_sent_url_encoded() {
    let addr = spawn_server().await;
    let request = HttpRequest::get(format!("http://{addr}/echo"))
        .query("name", "São Paulo")
        .query("count", 1);

    let response = transport().get(&request).await.unwrap();

    assert_eq!(response.status, 200);
    let echoed: HashMap<String, String> = serde_json::from_str(&response.body).unwrap();
    assert_eq!(echoed["name"], "São Paulo");
    assert_eq!(echoed["count"], "1");
}

#[tokio::test]
async fn non_success_status_is_returned_as_data() {
    let addr = spawn_server().await;
    let response = transport().get(&HttpRequest::get(format!("http://{addr}/nowhere"))).await.unwrap();
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = transport().get(&HttpRequest::get(format!("http://{addr}/users/1"))).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn client_fetches_user_over_http() {
    let addr = spawn_server().await;
    let user = client_for(addr).user("1").await.unwrap();
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.website, "hildegard.org");
}

#[tokio::test]
async fn client_maps_404_to_not_found() {
    let addr = spawn_server().await;
    let err = client_for(addr).user("7").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { status: 404 }));
}

#[tokio::test]
async fn client_filters_todos_by_user() {
    let addr = spawn_server().await;
    let todos = client_for(addr).todos_by_user(&UserId::parse("4").unwrap()).await.unwrap();
    assert_eq!(todos.len(), 4);
    assert!(todos[1].completed);
}

#[tokio::test]
async fn raw_fetch_returns_any_status_with_url() {
    let addr = spawn_server().await;
    let client = client_for(addr);

    let (url, response) = client.raw("/users/1").await.unwrap();
    assert_eq!(url, format!("http://{addr}/users/1"));
    assert_eq!(response.status, 200);

    let (_, response) = client.raw("999").await.unwrap();
    assert_eq!(response.status, 404);

    let (_, response) = client.raw("broken").await.unwrap();
    assert_eq!(response.body, "this is not json");
}
