//! Errors raised while talking to Chrome over the DevTools protocol.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdpError {
    // Discovery: `GET /json/version` on the debug port.
    /// Nothing answered `/json/version` on the debug endpoint.
    #[error("No DevTools endpoint answered at {0}")]
    EndpointUnreachable(String),

    #[error("DevTools HTTP request failed: {0}")]
    Http(String),

    // Transport: the browser WebSocket.
    #[error("Could not open DevTools socket: {0}")]
    ConnectionFailed(String),

    #[error("DevTools socket error: {0}")]
    WebSocket(String),

    /// The receive loop ended before a reply arrived.
    #[error("DevTools session closed")]
    SessionClosed,

    // Commands.
    /// Chrome answered a command with an `error` object.
    #[error("{message} (CDP code {code})")]
    Protocol { code: i64, message: String },

    #[error("Unexpected DevTools reply: {0}")]
    InvalidResponse(String),

    #[error("Malformed DevTools payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timed out: {0}")]
    Timeout(String),

    // Page.
    #[error("Could not load page: {0}")]
    NavigationFailed(String),

    /// XPath matched nothing, or matched an element with no visible box.
    #[error("No element for XPath {0}")]
    ElementNotFound(String),

    #[error("Page script threw: {0}")]
    JavaScript(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(e.to_string())
    }
}

impl From<reqwest::Error> for CdpError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<url::ParseError> for CdpError {
    fn from(e: url::ParseError) -> Self {
        Self::ConnectionFailed(format!("bad webSocketDebuggerUrl: {}", e))
    }
}
