//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in the adapter:
//!
//! - **Stateless (props-based)**: `TitleBar` and `CounterView` receive all
//!   data as struct fields and render it; nothing persists between frames.
//! - **Stateful (event-driven)**: `PostList` and `PostDetail` wrap a
//!   persistent `*State` struct held in the parent `TuiState`, cache layout
//!   facts during the render pass, and emit high-level events from
//!   `handle_event`.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests all live together.

mod counter_view;
mod post_detail;
mod post_list;
mod title_bar;

pub use counter_view::CounterView;
pub use post_detail::{PostDetail, PostDetailEvent, PostDetailState};
pub use post_list::{PostList, PostListEvent, PostListState};
pub use title_bar::TitleBar;
