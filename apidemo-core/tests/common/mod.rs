//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use apidemo_core::{
    ApiClient, ApiError, Dispatcher, Endpoints, HttpRequest, HttpResponse, ReaderSource,
    Transport,
};
use async_trait::async_trait;

pub const FAKE_API: &str = "http://fake.test";
pub const TICKERS: &str = "http://tickers.test/v1/tickers";
pub const GEOCODING: &str = "http://geo.test/v1/search";
pub const FORECAST: &str = "http://forecast.test/v1/forecast";

#[derive(Debug, Clone)]
enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

#[derive(Debug, Default)]
struct Script {
    routes: Vec<(String, Reply)>,
    calls: Vec<HttpRequest>,
}

/// Answers by exact URL (query excluded) and records every request it sees.
/// Unscripted URLs get a 404.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
        self.push(url, Reply::Respond(HttpResponse::new(status, body)))
    }

    pub fn fail(self, url: &str, message: &str) -> Self {
        self.push(url, Reply::Fail(message.to_string()))
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().calls.clone()
    }

    fn push(self, url: &str, reply: Reply) -> Self {
        self.script.lock().unwrap().routes.push((url.to_string(), reply));
        self
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(request.clone());

        let reply = script
            .routes
            .iter()
            .find(|(url, _)| *url == request.url)
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(ApiError::Transport(message)),
            None => Ok(HttpResponse::new(404, "{}")),
        }
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints {
        fake_api: FAKE_API.into(),
        tickers: TICKERS.into(),
        geocoding: GEOCODING.into(),
        forecast: FORECAST.into(),
    }
}

/// Drive one full menu session over `input` and return everything printed.
pub async fn run_session(transport: &ScriptedTransport, input: &str) -> String {
    run_session_bytes(transport, input.as_bytes()).await
}

/// Like [`run_session`], for input that need not be valid UTF-8.
pub async fn run_session_bytes(transport: &ScriptedTransport, input: &[u8]) -> String {
    let client = ApiClient::new(&endpoints(), transport.clone()).expect("test endpoints are valid");
    let dispatcher = Dispatcher::new(client);

    let mut source = ReaderSource::new(input);
    let mut out = Vec::new();
    dispatcher.run(&mut source, &mut out).await.expect("writing to a Vec never fails");

    String::from_utf8(out).expect("output is UTF-8")
}

pub fn todos_json(count: usize, user_id: u64) -> String {
    let items: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"userId":{user_id},"id":{n},"title":"todo number {n}","completed":{}}}"#,
                n % 3 == 0
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}
