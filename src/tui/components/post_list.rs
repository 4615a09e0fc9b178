//! # PostList Component
//!
//! The selectable list of fetched posts. Selection and the cached row
//! count live in `PostListState` (persisted in the parent `TuiState`); the
//! posts themselves are props borrowed from the core state each frame.
//!
//! Pressing Enter emits `PostListEvent::Open` with the selected index; the
//! event loop turns that into the navigation action.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::api::Post;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Selection state for the post list.
/// Must be persisted in the parent TuiState.
pub struct PostListState {
    pub list_state: ListState,
    /// Row count cached during the render pass for event handling.
    len: usize,
}

impl Default for PostListState {
    fn default() -> Self {
        Self::new()
    }
}

impl PostListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            len: 0,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn select_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) => (index + 1).min(self.len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map(|index| index.saturating_sub(1))
            .unwrap_or(0);
        self.list_state.select(Some(prev));
    }
}

/// High-level events the list emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostListEvent {
    /// Open the detail view for the post at this index.
    Open(usize),
}

impl EventHandler for PostListState {
    type Event = PostListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PostListEvent> {
        match event {
            TuiEvent::CursorDown => {
                self.select_next();
                None
            }
            TuiEvent::CursorUp => {
                self.select_prev();
                None
            }
            TuiEvent::Select => self.selected().map(PostListEvent::Open),
            _ => None,
        }
    }
}

pub struct PostList<'a> {
    pub posts: &'a [Post],
    pub state: &'a mut PostListState,
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.len = self.posts.len();
        if self.state.list_state.selected().is_none() && !self.posts.is_empty() {
            self.state.list_state.select(Some(0));
        }

        let items: Vec<ListItem> = self
            .posts
            .iter()
            .map(|post| ListItem::new(format!("{:>3}  {}", post.id, post.title)))
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title("Posts"))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_posts;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_list(posts: &[Post], state: &mut PostListState) -> String {
        let backend = TestBackend::new(50, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PostList { posts, state }.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_rows_in_fetched_order() {
        let posts = sample_posts(20);
        let mut state = PostListState::new();
        let text = render_list(&posts, &mut state);
        assert!(text.contains("post title 1"));
        assert!(text.contains("post title 2"));
        // First row selected by default.
        assert_eq!(state.selected(), Some(0));
        let first = text.find("post title 1").unwrap();
        let second = text.find("post title 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let posts = sample_posts(3);
        let mut state = PostListState::new();
        render_list(&posts, &mut state);

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), Some(2));
        // Clamped at the last row.
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), Some(2));

        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_select_emits_open_with_index() {
        let posts = sample_posts(5);
        let mut state = PostListState::new();
        render_list(&posts, &mut state);

        for _ in 0..3 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Select),
            Some(PostListEvent::Open(3))
        );
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let mut state = PostListState::new();
        render_list(&[], &mut state);
        assert_eq!(state.handle_event(&TuiEvent::Select), None);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), None);
    }
}
