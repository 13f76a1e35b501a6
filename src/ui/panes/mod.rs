//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`structures`]: every container in the current snapshot, with its markers
//! - [`operations`]: the full list of recorded operations, current one highlighted
//! - [`console`]: lines the demo printed up to the current step
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a `render_*` function and, where the pane scrolls,
//! a scroll state type owned by [`App`](crate::ui::App).

pub mod console;
pub mod operations;
pub mod status;
pub mod structures;

pub use console::render_console_pane;
pub use operations::{render_operations_pane, OperationsScrollState};
pub use status::render_status_bar;
pub use structures::render_structures_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 10, 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(&mut offset, 2, 4);
        assert_eq!(offset, 0);
    }
}
