use std::fmt;

use async_trait::async_trait;

use super::types::Post;

/// Errors that can occur while fetching posts.
///
/// The UI collapses all of these into one fixed message; the variants exist
/// for the log and for tests.
#[derive(Debug)]
pub enum PostsError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16 },
    /// The body was not the expected JSON array.
    Parse(String),
}

impl fmt::Display for PostsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostsError::Network(msg) => write!(f, "network error: {msg}"),
            PostsError::Api { status } => write!(f, "API error (HTTP {status})"),
            PostsError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for PostsError {}

/// Where posts come from. The app only ever issues one fetch per session.
#[async_trait]
pub trait PostsSource: Send + Sync {
    /// Returns the name of the source, for the log.
    fn name(&self) -> &str;

    /// Fetches the first `limit` posts of the collection, in server order.
    async fn fetch_posts(&self, limit: u32) -> Result<Vec<Post>, PostsError>;
}
