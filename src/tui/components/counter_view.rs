//! # CounterView Component
//!
//! The whole counter screen scene: the two totals boxes up top, the
//! cigarette with its falling ash chunk in the middle, the ashtray at the
//! bottom.
//!
//! The component is stateless; the sampled animation values arrive as
//! props each frame. The tilt keeps its numeric contract (degrees off the
//! 90° baseline) and is mapped onto a horizontal nudge of the art, since a
//! terminal cell grid cannot rotate. The drop value maps onto row offset,
//! glyph size and brightness of the chunk.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::anim::{self, CHUNK_FALL_UNITS, CIG_BASE_ROT_DEG};
use crate::core::state::{CounterState, PUFFS_PER_CIGARETTE};
use crate::tui::art;
use crate::tui::component::Component;

pub struct CounterView {
    pub counter: CounterState,
    pub tilt: f32,
    pub drop: f32,
}

impl CounterView {
    pub fn new(counter: CounterState, tilt: f32, drop: f32) -> Self {
        Self {
            counter,
            tilt,
            drop,
        }
    }

    fn render_totals(&self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [left, _, right] = Layout::horizontal([Length(16), Min(0), Length(16)]).areas(area);

        let cigs = Paragraph::new(format!("{}", self.counter.total_cigarettes))
            .alignment(Alignment::Center)
            .block(Block::bordered().title("cigarettes"));
        frame.render_widget(cigs, left);

        let trays = Paragraph::new(format!("{}", self.counter.total_ashtrays))
            .alignment(Alignment::Center)
            .block(Block::bordered().title("ashtrays"));
        frame.render_widget(trays, right);
    }

    fn render_cigarette_and_chunk(&self, frame: &mut Frame, area: Rect) {
        let art_line = art::cig_frame(self.counter.cigarette_stage());
        let width = art_line.chars().count() as u16;

        // The swing off the baseline becomes a horizontal nudge of the art.
        let rotation = anim::cigarette_rotation_deg(self.tilt);
        let nudge = ((CIG_BASE_ROT_DEG - rotation) * 0.6).round() as u16;

        let cig_x = area.x + area.width.saturating_sub(width) / 2 + nudge;
        let cig_rect = Rect::new(cig_x, area.y, width, 1).intersection(area);
        frame.render_widget(Paragraph::new(art_line), cig_rect);

        let puffs = Paragraph::new(format!(
            "puff {} / {}",
            self.counter.puff_count, PUFFS_PER_CIGARETTE
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        let puffs_rect = Rect::new(area.x, area.y + 1, area.width, 1).intersection(area);
        frame.render_widget(puffs, puffs_rect);

        // The chunk falls from the ember through the rows below the
        // cigarette; opacity and scale pick brightness and glyph.
        let transform = anim::chunk_transform(self.drop);
        if transform.opacity <= 0.05 || area.height <= 3 {
            return;
        }
        let fall_rows = area.height - 3;
        let row = ((transform.translate_y / CHUNK_FALL_UNITS)
            * f32::from(fall_rows.saturating_sub(1)))
        .round() as u16;
        let glyph = if transform.scale < 0.9 {
            art::CHUNK_SMALL
        } else {
            art::CHUNK_LARGE
        };
        let style = if transform.opacity < 0.5 {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Gray)
        };
        let ember_x = cig_x + width.saturating_sub(1);
        let chunk_rect = Rect::new(ember_x, area.y + 2 + row, 1, 1).intersection(area);
        frame.render_widget(Paragraph::new(glyph).style(style), chunk_rect);
    }

    fn render_ashtray(&self, frame: &mut Frame, area: Rect) {
        let tray = Paragraph::new(art::ashtray_frame(usize::from(self.counter.ashtray_level)))
            .alignment(Alignment::Center);
        frame.render_widget(tray, area);
    }
}

impl Component for CounterView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        // Too cramped to lay the scene out.
        if area.width < 32 || area.height < 12 {
            let hint = Paragraph::new("terminal too small").alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }

        let [totals_area, cig_area, tray_area] = Layout::vertical([
            Length(3),
            Min(6),
            Length(art::ASHTRAY_HEIGHT),
        ])
        .areas(area);

        self.render_totals(frame, totals_area);
        self.render_cigarette_and_chunk(frame, cig_area);
        self.render_ashtray(frame, tray_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(view: &mut CounterView, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                view.render(f, f.area());
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
    fn test_fresh_counter_renders_stage_zero() {
        let mut view = CounterView::new(CounterState::new(), 0.0, 0.0);
        let text = render_to_text(&mut view, 60, 18);
        assert!(text.contains("(▒▒▒▒)████████████████████▓"));
        assert!(text.contains("puff 0 / 12"));
        assert!(text.contains("cigarettes"));
        assert!(text.contains("ashtrays"));
        assert!(text.contains("╭──"));
    }

    #[test]
    fn test_mid_cigarette_renders_burned_stage() {
        let mut counter = CounterState::new();
        for _ in 0..6 {
            counter.tap();
        }
        let mut view = CounterView::new(counter, 0.0, 0.0);
        let text = render_to_text(&mut view, 60, 18);
        // Stage 3: half the paper gone.
        assert!(text.contains("(▒▒▒▒)████████░░░░░░░░░░░░▓"));
        assert!(text.contains("puff 6 / 12"));
    }

    #[test]
    fn test_chunk_visible_only_while_dropping() {
        let counter = CounterState::new();

        let mut resting = CounterView::new(counter, 0.0, 0.0);
        let text = render_to_text(&mut resting, 60, 18);
        assert!(!text.contains(art::CHUNK_LARGE));
        assert!(!text.contains(art::CHUNK_SMALL));

        let mut dropping = CounterView::new(counter, 0.0, 0.9);
        let text = render_to_text(&mut dropping, 60, 18);
        assert!(text.contains(art::CHUNK_LARGE));
    }

    #[test]
    fn test_tiny_terminal_gets_hint_instead_of_panic() {
        let mut view = CounterView::new(CounterState::new(), 0.0, 0.0);
        let text = render_to_text(&mut view, 20, 5);
        assert!(text.contains("terminal too small"));
    }
}
