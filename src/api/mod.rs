//! # Posts API
//!
//! The only networked part of Smoko: one GET against a JSON posts
//! collection. The `PostsSource` trait is the seam between the app and the
//! wire so tests can substitute a canned backend, and `HttpPostsClient` is
//! the real reqwest implementation.

pub mod client;
pub mod source;
pub mod types;

pub use client::HttpPostsClient;
pub use source::{PostsError, PostsSource};
pub use types::Post;
