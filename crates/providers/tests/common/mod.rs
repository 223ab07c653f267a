use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::header::CONTENT_TYPE;
use axum::http::{StatusCode, Uri};
use axum::Router;

/// A request seen by [`MockUpstream`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: HashMap<String, String>,
}

/// Throwaway HTTP server standing in for a provider.
///
/// Answers every request with the same status and body and records the
/// path and query of each request it receives.
pub struct MockUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request the server received.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one upstream request");
        requests.into_iter().next().unwrap()
    }
}

/// Bind a mock provider on `127.0.0.1:0` whose base URL ends in `/v1`.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> MockUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().fallback(
        move |uri: Uri, Query(query): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(Recorded {
                    path: uri.path().to_string(),
                    query,
                });
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        },
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        base_url: format!("http://{addr}/v1"),
        requests,
    }
}

/// A base URL on a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}
