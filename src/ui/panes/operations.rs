//! Operation history pane
//!
//! Lists every recorded operation with its outcome. The current step is
//! highlighted and kept in view whenever the cursor moves; between moves the
//! list can be scrolled freely.

use super::{clamp_scroll, pane_block};
use crate::trace::{Outcome, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Scroll state for the operations pane
pub struct OperationsScrollState {
    pub offset: usize,
    pub prev_position: Option<usize>,
}

impl OperationsScrollState {
    pub fn new() -> Self {
        OperationsScrollState {
            offset: 0,
            prev_position: None,
        }
    }

    /// Scroll just enough to show `position` if the cursor moved since last frame
    pub fn follow(&mut self, position: usize, visible_height: usize) {
        if self.prev_position == Some(position) {
            return;
        }
        self.prev_position = Some(position);
        if position < self.offset {
            self.offset = position;
        } else if position >= self.offset + visible_height {
            self.offset = position + 1 - visible_height;
        }
    }
}

impl Default for OperationsScrollState {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_span(outcome: &Outcome) -> Span<'static> {
    let color = match outcome {
        Outcome::Done => DEFAULT_THEME.comment,
        Outcome::Value(_) => DEFAULT_THEME.success,
        Outcome::Error(_) => DEFAULT_THEME.error,
    };
    Span::styled(format!("  {}", outcome), Style::default().fg(color))
}

pub fn render_operations_pane(
    frame: &mut Frame,
    area: Rect,
    snapshots: &[Snapshot],
    position: usize,
    is_focused: bool,
    scroll_state: &mut OperationsScrollState,
) {
    let block = pane_block(" Operations ", is_focused);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    scroll_state.follow(position, visible_height);
    clamp_scroll(&mut scroll_state.offset, snapshots.len(), visible_height);

    let number_width = snapshots.len().to_string().len();
    let items: Vec<ListItem> = snapshots
        .iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|snapshot| {
            let is_current = snapshot.step == position;
            let line = Line::from(vec![
                Span::styled(
                    if is_current { "→ " } else { "  " },
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(
                    format!("{:>width$} ", snapshot.step + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    snapshot.operation.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                outcome_span(&snapshot.outcome),
            ]);

            let item = ListItem::new(line);
            if is_current {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
