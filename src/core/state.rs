//! # Application State
//!
//! Core business state for Smoko. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── counter: CounterState          // puffs, cigarettes, ashtrays
//! ├── posts: PostsState              // Loading → Loaded | Failed
//! ├── route: Route                   // Home or Details
//! ├── status_message: String         // status bar text
//! ├── source: Arc<dyn PostsSource>   // posts backend
//! └── posts_limit: u32               // how many posts one fetch asks for
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{Post, PostsSource};
use crate::core::config::ResolvedConfig;

/// Puffs that finish one cigarette.
pub const PUFFS_PER_CIGARETTE: u8 = 12;
/// Finished cigarettes that fill one ashtray.
pub const LEVELS_PER_ASHTRAY: u8 = 6;

/// Shown in place of the list whenever the fetch fails, regardless of why.
pub const POSTS_ERROR_MESSAGE: &str = "Something went wrong while loading posts.";

/// The tap-driven counter state machine.
///
/// All four counters start at zero and are only ever touched by [`tap`].
/// `puff_count` stays in 0..=11 and `ashtray_level` in 0..=5; the wrap
/// happens by threshold reset, never by modulo on a running total.
///
/// [`tap`]: CounterState::tap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub puff_count: u8,
    pub total_cigarettes: u32,
    pub ashtray_level: u8,
    pub total_ashtrays: u32,
}

/// What a single tap did, for the caller to animate and log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapOutcome {
    /// The new puff count is even, so a chunk of ash fell.
    pub chunk_dropped: bool,
    /// The tap finished the current cigarette.
    pub cigarette_finished: bool,
    /// Finishing the cigarette also filled and emptied the ashtray.
    pub ashtray_emptied: bool,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one tap.
    ///
    /// The ash chunk fires on even puff counts, checked before the wrap so
    /// the 12th puff both drops a chunk and finishes the cigarette.
    pub fn tap(&mut self) -> TapOutcome {
        let next_puff = self.puff_count + 1;
        let chunk_dropped = next_puff % 2 == 0;
        self.puff_count = next_puff;

        let mut cigarette_finished = false;
        let mut ashtray_emptied = false;
        if next_puff >= PUFFS_PER_CIGARETTE {
            self.puff_count = 0;
            self.total_cigarettes += 1;
            cigarette_finished = true;

            self.ashtray_level += 1;
            if self.ashtray_level >= LEVELS_PER_ASHTRAY {
                self.ashtray_level = 0;
                self.total_ashtrays += 1;
                ashtray_emptied = true;
            }
        }

        TapOutcome {
            chunk_dropped,
            cigarette_finished,
            ashtray_emptied,
        }
    }

    /// Burn-down frame index for the current cigarette, 0..=5.
    /// Derived on demand, never stored.
    pub fn cigarette_stage(&self) -> usize {
        (self.puff_count / 2) as usize
    }
}

/// Lifecycle of the one posts fetch.
///
/// Every failure mode (network, status, parse) collapses into `Failed`;
/// the distinction only survives in the log.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsState {
    Loading,
    Loaded { posts: Vec<Post> },
    Failed,
}

/// Navigation state of the posts screen. `Details` carries the selected
/// post by value; opening it never refetches.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Details { post: Post },
}

pub struct App {
    pub counter: CounterState,
    pub posts: PostsState,
    pub route: Route,
    pub status_message: String,
    pub source: Arc<dyn PostsSource>,
    pub posts_limit: u32,
}

impl App {
    pub fn new(source: Arc<dyn PostsSource>) -> Self {
        Self {
            counter: CounterState::new(),
            posts: PostsState::Loading,
            route: Route::Home,
            status_message: String::from("Welcome to Smoko!"),
            source,
            posts_limit: crate::core::config::DEFAULT_POSTS_LIMIT,
        }
    }

    pub fn from_config(source: Arc<dyn PostsSource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source);
        app.posts_limit = config.posts_limit;
        app
    }
}
