//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a tap tween running, or the posts fetch loading): draws
//!   every ~80ms for smooth motion.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Background work
//!
//! The one posts fetch runs on a spawned tokio task and reports back as an
//! `Action` over an mpsc channel, drained at the bottom of each loop turn.
//! If the loop exits first, the receiver drops and the result is discarded.

mod component;
mod components;
mod event;

pub mod art;
pub mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::Screen;
use crate::api::{HttpPostsClient, PostsSource};
use crate::core::action::{Action, Effect, update};
use crate::core::anim::{self, AnimValue};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, PostsState, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::{PostDetailEvent, PostDetailState, PostListEvent, PostListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Sampled animation values for the counter scene
    pub tilt: AnimValue,
    pub drop: AnimValue,
    // Persistent component states
    pub post_list: PostListState,
    pub post_detail: PostDetailState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            tilt: AnimValue::new(0.0),
            drop: AnimValue::new(0.0),
            post_list: PostListState::new(),
            post_detail: PostDetailState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn PostsSource> = Arc::new(HttpPostsClient::new(config.posts_base_url.clone()));
    let mut app = App::from_config(source, &config);
    let screen = match config.screen.as_str() {
        "posts" => Screen::Posts,
        _ => {
            // Default to the counter
            Screen::Counter
        }
    };
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    match screen {
        Screen::Posts => {
            let effect = update(&mut app, Action::FetchPosts);
            if effect == Effect::SpawnFetch {
                spawn_fetch(&app, tx.clone());
            }
        }
        Screen::Counter => {
            app.status_message = String::from("Space to take a puff");
        }
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Determine if anything is moving (a tap tween or the loading spinner)
        let now = Instant::now();
        let animating = match screen {
            Screen::Counter => tui.tilt.is_animating(now) || tui.drop.is_animating(now),
            Screen::Posts => matches!(app.posts, PostsState::Loading),
        };

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, screen, now, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // `q` and Ctrl+C quit regardless of screen or route
            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                let effect = update(&mut app, Action::Quit);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            match screen {
                Screen::Counter => match event {
                    TuiEvent::Tap | TuiEvent::Select => {
                        let effect = update(&mut app, Action::Tap);
                        if let Effect::AnimateTap { chunk } = effect {
                            let tapped_at = Instant::now();
                            tui.tilt.retrigger(anim::tilt_sequence(), tapped_at);
                            if chunk {
                                tui.drop.snap(0.0);
                                tui.drop.retrigger(anim::drop_sequence(), tapped_at);
                            }
                        }
                    }
                    TuiEvent::Back => {
                        let effect = update(&mut app, Action::Quit);
                        if effect == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    _ => {}
                },
                Screen::Posts => {
                    let on_details = matches!(app.route, Route::Details { .. });
                    if on_details {
                        if let Some(PostDetailEvent::Close) = tui.post_detail.handle_event(&event)
                        {
                            update(&mut app, Action::CloseDetails);
                            tui.post_detail.reset();
                        }
                    } else if let Some(PostListEvent::Open(index)) =
                        tui.post_list.handle_event(&event)
                    {
                        update(&mut app, Action::OpenPost(index));
                    } else if matches!(event, TuiEvent::Back) {
                        // Esc on the list leaves the app
                        let effect = update(&mut app, Action::Quit);
                        if effect == Effect::Quit {
                            should_quit = true;
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (the fetch result)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            match effect {
                Effect::Quit => should_quit = true,
                Effect::SpawnFetch => spawn_fetch(&app, tx.clone()),
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning posts fetch via {} source (limit={})",
        app.source.name(),
        app.posts_limit
    );

    // Clone what we need for the async task
    let source = app.source.clone();
    let limit = app.posts_limit;

    tokio::spawn(async move {
        let action = match source.fetch_posts(limit).await {
            Ok(posts) => {
                info!("Fetch delivered {} posts", posts.len());
                Action::PostsLoaded(posts)
            }
            Err(e) => {
                warn!("Posts fetch failed: {e}");
                Action::PostsFailed
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
