//! In-process stand-in for the spreadsheet web app
//!
//! Serves canned responses on a random local port and records every request
//! it receives.

use std::io::Read as _;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

impl RecordedRequest {
    /// Decoded query parameter
    pub fn query(&self, key: &str) -> Option<String> {
        let url = reqwest::Url::parse(&format!("http://localhost{}", self.url)).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn action(&self) -> Option<String> {
        self.query("action")
    }
}

type Handler = dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync;

pub struct FakeServer {
    server: Arc<Server>,
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeServer {
    /// Start a server answering every request with `handler`
    pub fn start(handler: impl Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static) -> Self {
        Self::start_with_delay(Duration::ZERO, handler)
    }

    /// Like [`FakeServer::start`], sleeping `delay` before each response
    pub fn start_with_delay(
        delay: Duration,
        handler: impl Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    ) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind fake server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("fake server listens on an IP address");
        let url = format!("http://{addr}/exec");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handler: Arc<Handler> = Arc::new(handler);
        let thread_server = Arc::clone(&server);
        let thread_requests = Arc::clone(&requests);
        let handle = std::thread::spawn(move || {
            for mut request in thread_server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let recorded = RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body,
                };
                thread_requests.lock().unwrap().push(recorded.clone());

                let (status, body) = handler(&recorded);
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("valid header");
                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            server,
            url,
            requests,
            handle: Some(handle),
        }
    }

    /// Route by the `action` query parameter; unknown actions get a remote error
    pub fn with_routes(routes: Vec<(&'static str, String)>) -> Self {
        Self::start(move |request| {
            let action = request.action().unwrap_or_default();
            routes
                .iter()
                .find(|(name, _)| *name == action)
                .map_or_else(
                    || (200, format!(r#"{{"error":"Unknown action: {action}"}}"#)),
                    |(_, body)| (200, body.clone()),
                )
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, action: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.action().as_deref() == Some(action))
            .collect()
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
