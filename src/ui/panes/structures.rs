//! Structures pane rendering
//!
//! Draws every [`StructureView`] of the current snapshot in its own bordered
//! block, stacked top to bottom under the operation line. Scrolling moves by
//! whole views. Inside a block the cells form one row; the connectors between cells depend on the view kind:
//!
//! ```text
//! Array         [10][20][  ][  ]
//! Linked        [3] → [2] → [1] → null
//! DoublyLinked  null ← [A] ⇄ [B] → null
//! Circular      [1] → [2] → [3] ↩
//! ```
//!
//! Markers (`top`, `front`, `head`, ...) are printed on the line below,
//! starting under the cell they point at. Array views also get an index line.

use super::{clamp_scroll, pane_block};
use crate::trace::{Snapshot, StructureView, ViewKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border rows above and below each view's body
const VIEW_BORDER_ROWS: usize = 2;

/// Horizontal layout of one row of cells
struct RowLayout {
    spans: Vec<Span<'static>>,
    /// Start column of each cell
    starts: Vec<usize>,
}

fn cell_text(cell: &Option<String>) -> String {
    match cell {
        Some(value) => format!("[{}]", value),
        None => "[  ]".to_string(),
    }
}

fn layout_row(view: &StructureView) -> RowLayout {
    let link = Style::default().fg(DEFAULT_THEME.link);
    let mut spans = Vec::new();
    let mut starts = Vec::with_capacity(view.cells.len());

    if view.cells.is_empty() {
        let empty = match view.kind {
            ViewKind::Array => "[]",
            ViewKind::Linked | ViewKind::DoublyLinked => "null",
            ViewKind::Circular | ViewKind::Sequence => "(empty)",
        };
        spans.push(Span::styled(empty, Style::default().fg(DEFAULT_THEME.comment)));
        return RowLayout { spans, starts };
    }

    let (prefix, separator, suffix) = match view.kind {
        ViewKind::Array => ("", "", ""),
        ViewKind::Sequence => ("", " ", ""),
        ViewKind::Linked => ("", " → ", " → null"),
        ViewKind::DoublyLinked => ("null ← ", " ⇄ ", " → null"),
        ViewKind::Circular => ("", " → ", " ↩"),
    };

    let mut column = 0;
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, link));
        column += prefix.chars().count();
    }

    for (i, cell) in view.cells.iter().enumerate() {
        if i > 0 && !separator.is_empty() {
            spans.push(Span::styled(separator, link));
            column += separator.chars().count();
        }

        let style = if cell.is_none() {
            Style::default().fg(DEFAULT_THEME.comment)
        } else if view.markers_at(i).is_empty() {
            Style::default().fg(DEFAULT_THEME.value)
        } else {
            Style::default()
                .fg(DEFAULT_THEME.marker)
                .add_modifier(Modifier::BOLD)
        };

        let text = cell_text(cell);
        starts.push(column);
        column += text.chars().count();
        spans.push(Span::styled(text, style));
    }

    if !suffix.is_empty() {
        spans.push(Span::styled(suffix, link));
    }

    RowLayout { spans, starts }
}

/// Place `labels[i]` at `starts[i]`, pushing right when the previous label overlaps
fn aligned_labels(starts: &[usize], labels: &[(usize, String)]) -> String {
    let mut line = String::new();
    for (index, label) in labels {
        let Some(&start) = starts.get(*index) else {
            continue;
        };
        let used = line.chars().count();
        let column = if used == 0 { start } else { start.max(used + 1) };
        line.extend(std::iter::repeat(' ').take(column - used));
        line.push_str(label);
    }
    line
}

/// Text of the marker line, e.g. `"    ^top"`
pub(crate) fn marker_line(view: &StructureView, starts: &[usize]) -> String {
    let labels: Vec<(usize, String)> = (0..view.cells.len())
        .filter_map(|i| {
            let here = view.markers_at(i);
            (!here.is_empty()).then(|| (i, format!("^{}", here.join("/"))))
        })
        .collect();
    aligned_labels(starts, &labels)
}

fn index_line(starts: &[usize]) -> String {
    let labels: Vec<(usize, String)> = (0..starts.len()).map(|i| (i, format!(" {}", i))).collect();
    aligned_labels(starts, &labels)
}

fn view_block(view: &StructureView) -> Block<'static> {
    let title = Line::from(vec![
        Span::styled(
            format!(" {}", view.title),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} items) ", view.cells.iter().filter(|c| c.is_some()).count()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
}

/// Lines drawn inside a view's block: the cell row, then index and marker lines
fn view_body(view: &StructureView) -> Vec<Line<'static>> {
    let row = layout_row(view);
    let mut lines = vec![Line::from(row.spans)];

    if view.kind == ViewKind::Array && !row.starts.is_empty() {
        lines.push(Line::styled(
            index_line(&row.starts),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let markers = marker_line(view, &row.starts);
    if !markers.is_empty() {
        lines.push(Line::styled(markers, Style::default().fg(DEFAULT_THEME.marker)));
    }
    lines
}

/// Stack blocks of the given heights from view `first` down, as
/// `(view index, y offset, height)`. The last block is cut to fit; one
/// with no room for a body line is left out.
fn stack_views(heights: &[u16], first: usize, available: u16) -> Vec<(usize, u16, u16)> {
    let mut placed = Vec::new();
    let mut y: u16 = 0;
    for (index, &height) in heights.iter().enumerate().skip(first) {
        let remaining = available.saturating_sub(y);
        if (remaining as usize) <= VIEW_BORDER_ROWS {
            break;
        }
        let height = height.min(remaining);
        placed.push((index, y, height));
        y += height;
    }
    placed
}

/// Render the current snapshot's structures
pub fn render_structures_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Structures ", is_focused);

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(nothing recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let outcome_color = if snapshot.outcome.is_error() {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.success
    };
    let header = Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            snapshot.operation.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", snapshot.outcome),
            Style::default().fg(outcome_color),
        ),
    ]);
    let header_area = Rect {
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(header), header_area);

    // one blank row between the header and the first view
    let views_area = Rect {
        y: inner.y.saturating_add(2),
        height: inner.height.saturating_sub(2),
        ..inner
    };

    let mut bodies: Vec<Vec<Line<'static>>> =
        snapshot.structures.iter().map(view_body).collect();
    let heights: Vec<u16> = bodies
        .iter()
        .map(|body| u16::try_from(body.len() + VIEW_BORDER_ROWS).unwrap_or(u16::MAX))
        .collect();
    clamp_scroll(scroll_offset, bodies.len(), 1);

    for (index, y, height) in stack_views(&heights, *scroll_offset, views_area.height) {
        let rect = Rect {
            y: views_area.y + y,
            height,
            ..views_area
        };
        let body = std::mem::take(&mut bodies[index]);
        let paragraph = Paragraph::new(body).block(view_block(&snapshot.structures[index]));
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_line_under_cells() {
        let view = StructureView::new("Stack", ViewKind::Array)
            .with_slots(vec![Some("1".into()), Some("2".into()), None])
            .mark("top", Some(1));
        let row = layout_row(&view);
        assert_eq!(row.starts, vec![0, 3, 6]);
        assert_eq!(marker_line(&view, &row.starts), "   ^top");
    }

    #[test]
    fn test_shared_and_crowded_markers() {
        let view = StructureView::new("Queue", ViewKind::Array)
            .with_values(["7", "8"])
            .mark("front", Some(0))
            .mark("rear", Some(0))
            .mark("next", Some(1));
        let row = layout_row(&view);
        assert_eq!(marker_line(&view, &row.starts), "^front/rear ^next");
    }

    #[test]
    fn test_linked_row_offsets_skip_arrows() {
        let view = StructureView::new("List", ViewKind::DoublyLinked).with_values(["A", "B"]);
        let row = layout_row(&view);
        assert_eq!(row.starts, vec![7, 13]);
    }

    #[test]
    fn test_empty_view_has_no_cells() {
        let view = StructureView::new("List", ViewKind::Linked);
        let row = layout_row(&view);
        assert!(row.starts.is_empty());
        assert_eq!(marker_line(&view, &row.starts), "");
    }

    #[test]
    fn test_each_view_gets_its_own_block() {
        let queue = StructureView::new("Queue", ViewKind::Array)
            .with_values(["7", "8"])
            .mark("front", Some(0));
        let list = StructureView::new("List", ViewKind::Linked).with_values(["1"]);
        // row, index line and marker line for the array; the row alone for the list
        assert_eq!(view_body(&queue).len(), 3);
        assert_eq!(view_body(&list).len(), 1);

        let heights = [5, 3, 4];
        assert_eq!(stack_views(&heights, 0, 20), vec![(0, 0, 5), (1, 5, 3), (2, 8, 4)]);
        assert_eq!(stack_views(&heights, 1, 20), vec![(1, 0, 3), (2, 3, 4)]);
    }

    #[test]
    fn test_views_stop_when_the_pane_is_full() {
        let heights = [5, 5, 5];
        // second block is cut to 4 rows, third has no room
        assert_eq!(stack_views(&heights, 0, 9), vec![(0, 0, 5), (1, 5, 4)]);
        // two rows cannot hold a border and a body line
        assert_eq!(stack_views(&heights, 0, 7), vec![(0, 0, 5)]);
        assert!(stack_views(&heights, 3, 20).is_empty());
    }
}
