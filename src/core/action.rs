//! # Actions
//!
//! Everything that can happen in Smoko becomes an `Action`.
//! User taps the cigarette? That's `Action::Tap`.
//! The fetch comes back? That's `Action::PostsLoaded(posts)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No side effects here. I/O happens elsewhere;
//! when the reducer needs some, it names it in the returned `Effect` and
//! the event loop carries it out.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on the state.

use log::debug;

use crate::api::Post;
use crate::core::state::{App, PostsState, Route};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// One tap on the counter screen.
    Tap,
    /// Entering the posts screen: kick off the one fetch.
    FetchPosts,
    /// The fetch task delivered the list.
    PostsLoaded(Vec<Post>),
    /// The fetch task failed; the reason is already in the log.
    PostsFailed,
    /// Open the detail route for the post at this list index.
    OpenPost(usize),
    /// Leave the detail route.
    CloseDetails,
    Quit,
}

/// I/O the event loop must perform after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Restart the tap animations: the tilt always, the ash chunk when one fell.
    AnimateTap { chunk: bool },
    /// Spawn the background posts fetch.
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Tap => {
            let outcome = app.counter.tap();
            debug!(
                "tap: puff={} stage={} outcome={:?}",
                app.counter.puff_count,
                app.counter.cigarette_stage(),
                outcome
            );
            if outcome.ashtray_emptied {
                app.status_message = format!(
                    "Ashtray emptied, that makes {}",
                    app.counter.total_ashtrays
                );
            } else if outcome.cigarette_finished {
                app.status_message =
                    format!("Cigarette {} finished", app.counter.total_cigarettes);
            }
            Effect::AnimateTap {
                chunk: outcome.chunk_dropped,
            }
        }
        Action::FetchPosts => {
            app.posts = PostsState::Loading;
            app.route = Route::Home;
            app.status_message = String::from("Loading posts...");
            Effect::SpawnFetch
        }
        Action::PostsLoaded(posts) => {
            app.status_message = format!("Loaded {} posts", posts.len());
            app.posts = PostsState::Loaded { posts };
            Effect::None
        }
        Action::PostsFailed => {
            app.posts = PostsState::Failed;
            app.status_message = String::from("Fetch failed");
            Effect::None
        }
        Action::OpenPost(index) => {
            if let PostsState::Loaded { posts } = &app.posts
                && let Some(post) = posts.get(index)
            {
                debug!("open post id={} at index {}", post.id, index);
                app.route = Route::Details { post: post.clone() };
            }
            Effect::None
        }
        Action::CloseDetails => {
            app.route = Route::Home;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
