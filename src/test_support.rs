//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Post, PostsError, PostsSource};
use crate::core::state::App;

/// A canned source for tests that don't need real HTTP.
pub struct StaticPostsSource {
    pub posts: Vec<Post>,
}

#[async_trait]
impl PostsSource for StaticPostsSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_posts(&self, limit: u32) -> Result<Vec<Post>, PostsError> {
        Ok(self.posts.iter().take(limit as usize).cloned().collect())
    }
}

/// A source that always fails, for the error path.
pub struct FailingPostsSource;

#[async_trait]
impl PostsSource for FailingPostsSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_posts(&self, _limit: u32) -> Result<Vec<Post>, PostsError> {
        Err(PostsError::Network("connection refused".to_string()))
    }
}

/// Creates a test App backed by an empty StaticPostsSource.
pub fn test_app() -> App {
    App::new(Arc::new(StaticPostsSource { posts: vec![] }))
}

/// Builds `n` distinct posts with predictable content.
pub fn sample_posts(n: usize) -> Vec<Post> {
    (1..=n as u64)
        .map(|id| Post {
            id,
            title: format!("post title {id}"),
            body: format!("body of post {id}, line one.\nline two."),
        })
        .collect()
}
