use async_trait::async_trait;
use log::{debug, info};

use super::source::{PostsError, PostsSource};
use super::types::Post;

/// Fetches posts over HTTP from a JSONPlaceholder-shaped API.
///
/// One unconditional `GET {base_url}/posts?_limit={limit}`; the limit rides
/// in the query string so the server truncates the collection for us.
pub struct HttpPostsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPostsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PostsSource for HttpPostsClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_posts(&self, limit: u32) -> Result<Vec<Post>, PostsError> {
        let url = format!("{}/posts", self.base_url.trim_end_matches('/'));
        debug!("GET {url}?_limit={limit}");

        let response = self
            .client
            .get(&url)
            .query(&[("_limit", limit)])
            .send()
            .await
            .map_err(|e| PostsError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostsError::Api {
                status: status.as_u16(),
            });
        }

        // Read the body as text first so a malformed payload surfaces as a
        // parse error rather than a transport error.
        let body = response
            .text()
            .await
            .map_err(|e| PostsError::Network(e.to_string()))?;
        let posts: Vec<Post> =
            serde_json::from_str(&body).map_err(|e| PostsError::Parse(e.to_string()))?;

        info!("Fetched {} posts from {}", posts.len(), url);
        Ok(posts)
    }
}
