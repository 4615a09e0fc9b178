//! # TitleBar Component
//!
//! Top status bar showing which screen is active and the latest status
//! message. Purely presentational: all data arrives as props, there is no
//! internal state, so it renders the same way on any frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `screen_name`: the active screen ("counter" or "posts")
/// - `status_message`: transient status (e.g. "Loading posts...")
pub struct TitleBar {
    pub screen_name: &'static str,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_name: &'static str, status_message: String) -> Self {
        Self {
            screen_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Smoko [{}]", self.screen_name)
        } else {
            format!("Smoko [{}] | {}", self.screen_name, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("posts", "Loaded 20 posts".to_string());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Smoko [posts]"));
        assert!(text.contains("Loaded 20 posts"));
    }

    #[test]
    fn test_title_bar_without_status_message() {
        let mut title_bar = TitleBar::new("counter", String::new());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Smoko [counter]"));
        assert!(!text.contains('|'));
    }
}
