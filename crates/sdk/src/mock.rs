//! Recording transport and fixtures shared by unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use crate::client::Client;
use crate::error::SdkError;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Transport answering from a queue of canned responses and recording
/// every request it receives.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, String>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues a response.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queues a response with a raw byte body.
    pub(crate) fn respond_bytes(self, status: u16, body: &[u8]) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queues a transport failure.
    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.path.clone())
            .collect()
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, SdkError>> + Send + '_>> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();

        Box::pin(async move {
            match next {
                Some(Ok(response)) => Ok(response),
                Some(Err(message)) => Err(SdkError::network(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    message,
                ))),
                None => Err(SdkError::network(std::io::Error::other(
                    "no mock response available",
                ))),
            }
        })
    }
}

/// Session on game id 10 with token `test-token`.
pub(crate) fn session() -> Session {
    Session::new("test-token", 10).unwrap()
}

/// Client over `mock`, downloading into `save_dir`.
pub(crate) fn client(mock: &Arc<MockTransport>, save_dir: &Path) -> Client {
    Client::with_transport(session(), mock.clone()).with_save_dir(save_dir)
}

/// Token endpoint body for a valid token bound to `username`.
pub(crate) fn token_ok(username: &str) -> String {
    serde_json::json!({
        "success": true,
        "token": true,
        "userRole": {
            "username": username,
            "mail": format!("{username}@example.com"),
            "avatar": null,
            "description": null,
            "balance": 0,
            "roles": ["user"],
        }
    })
    .to_string()
}

/// Game lookup body for a game with the given id.
pub(crate) fn game_ok(id: i32) -> String {
    serde_json::json!({
        "success": true,
        "game": {
            "id": id,
            "name": "Tetris",
            "price": 30,
            "author": "bob",
            "publishDate": "2020-11-18T12:00:00Z",
            "introduction": "falling blocks",
            "description": null,
        }
    })
    .to_string()
}
