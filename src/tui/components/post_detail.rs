//! # PostDetail Component
//!
//! Full view of one post: title on top, scrollable body below. The post
//! arrives by value on the route when the list row is opened; nothing is
//! refetched here.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Post;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the detail body.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct PostDetailState {
    pub scroll: ScrollViewState,
}

impl PostDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the scroll position when leaving the view, so the next post
    /// starts at the top.
    pub fn reset(&mut self) {
        self.scroll = ScrollViewState::default();
    }
}

/// High-level events the detail view emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDetailEvent {
    /// Navigate back to the list.
    Close,
}

impl EventHandler for PostDetailState {
    type Event = PostDetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PostDetailEvent> {
        match event {
            TuiEvent::Back => Some(PostDetailEvent::Close),
            TuiEvent::CursorUp => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

pub struct PostDetail<'a> {
    pub post: &'a Post,
    pub state: &'a mut PostDetailState,
}

impl Component for PostDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [title_area, body_area] = Layout::vertical([Length(2), Min(0)]).areas(area);

        let title = Paragraph::new(self.post.title.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true });
        frame.render_widget(title, title_area);

        // Leave a column for the scrollbar.
        let content_width = body_area.width.saturating_sub(1);
        if content_width == 0 || body_area.height == 0 {
            return;
        }
        let body = Paragraph::new(self.post.body.as_str()).wrap(Wrap { trim: false });
        let content_height = (body.line_count(content_width) as u16).max(1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(body, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_posts;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_detail(post: &Post, state: &mut PostDetailState) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PostDetail { post, state }.render(f, f.area());
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
    fn test_detail_shows_title_and_body() {
        let posts = sample_posts(4);
        let mut state = PostDetailState::new();
        let text = render_detail(&posts[3], &mut state);
        assert!(text.contains("post title 4"));
        assert!(text.contains("body of post 4, line one."));
        assert!(text.contains("line two."));
    }

    #[test]
    fn test_back_emits_close() {
        let mut state = PostDetailState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Back),
            Some(PostDetailEvent::Close)
        );
    }

    #[test]
    fn test_cursor_keys_scroll_without_emitting() {
        let mut state = PostDetailState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollPageDown), None);
    }
}
