use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::Screen;
use crate::core::state::{App, POSTS_ERROR_MESSAGE, PostsState, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CounterView, PostDetail, PostList, TitleBar};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    screen: Screen,
    now: Instant,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let [title_area, main_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(screen.as_str(), app.status_message.clone()).render(frame, title_area);

    match screen {
        Screen::Counter => {
            CounterView::new(app.counter, tui.tilt.sample(now), tui.drop.sample(now))
                .render(frame, main_area);
        }
        Screen::Posts => draw_posts_screen(frame, main_area, app, tui, spinner_frame),
    }

    let hint = match screen {
        Screen::Counter => "space: tap | q: quit",
        Screen::Posts => match app.route {
            Route::Home => "up/down: select | enter: open | q: quit",
            Route::Details { .. } => "esc: back | up/down: scroll | q: quit",
        },
    };
    frame.render_widget(
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

fn draw_posts_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match &app.posts {
        PostsState::Loading => draw_loading_view(frame, area, spinner_frame),
        PostsState::Failed => draw_error_view(frame, area, POSTS_ERROR_MESSAGE),
        PostsState::Loaded { posts } => match &app.route {
            Route::Home => {
                PostList {
                    posts,
                    state: &mut tui.post_list,
                }
                .render(frame, area);
            }
            Route::Details { post } => {
                PostDetail {
                    post,
                    state: &mut tui.post_detail,
                }
                .render(frame, area);
            }
        },
    }
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let spinner = Paragraph::new(format!("{glyph} Loading posts...")).alignment(Alignment::Center);
    frame.render_widget(spinner, line);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_posts, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState, screen: Screen) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, screen, Instant::now(), 0))
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
    fn test_counter_screen_renders_scene_and_hints() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui, Screen::Counter);
        assert!(text.contains("Smoko [counter]"));
        assert!(text.contains("puff 0 / 12"));
        assert!(text.contains("space: tap"));
    }

    #[test]
    fn test_posts_screen_loading_shows_spinner() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui, Screen::Posts);
        assert!(text.contains("Loading posts..."));
    }

    #[test]
    fn test_posts_screen_failed_shows_fixed_message_and_no_rows() {
        let mut app = test_app();
        app.posts = PostsState::Failed;
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui, Screen::Posts);
        assert!(text.contains(POSTS_ERROR_MESSAGE));
        assert!(text.contains("ERROR"));
        assert!(!text.contains("post title"));
    }

    #[test]
    fn test_posts_screen_loaded_shows_list_then_detail() {
        let mut app = test_app();
        let posts = sample_posts(20);
        app.posts = PostsState::Loaded {
            posts: posts.clone(),
        };
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui, Screen::Posts);
        assert!(text.contains("post title 1"));
        assert!(text.contains("enter: open"));

        app.route = Route::Details {
            post: posts[3].clone(),
        };
        let text = render_to_text(&app, &mut tui, Screen::Posts);
        assert!(text.contains("post title 4"));
        assert!(text.contains("body of post 4"));
        assert!(text.contains("esc: back"));
    }
}
