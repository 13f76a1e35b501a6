//! Display-independent views of container state
//!
//! A [`StructureView`] is what a snapshot stores for one container: a row of cells
//! (occupied or empty), a shape describing how the cells are linked, and named
//! markers such as `top`, `front` or `head`. The same view feeds both the plain
//! console renderer and the TUI structures pane.

use std::fmt::Write as _;

/// How the cells of a view are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Contiguous slots of a fixed-capacity array
    Array,
    /// Singly linked nodes ending in null
    Linked,
    /// Doubly linked nodes, null at both ends
    DoublyLinked,
    /// Singly linked nodes whose last link returns to the first
    Circular,
    /// A plain sequence of values (algorithm inputs and outputs)
    Sequence,
}

/// A named position inside a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub label: &'static str,
    pub index: usize,
}

/// Snapshot of one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureView {
    pub title: String,
    pub kind: ViewKind,
    pub cells: Vec<Option<String>>, // None renders as an empty slot
    pub markers: Vec<Marker>,
}

impl StructureView {
    pub fn new(title: impl Into<String>, kind: ViewKind) -> Self {
        StructureView {
            title: title.into(),
            kind,
            cells: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Append occupied cells
    pub fn with_values<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.cells
            .extend(values.into_iter().map(|v| Some(v.to_string())));
        self
    }

    /// Replace the cells, keeping empty slots
    pub fn with_slots(mut self, slots: Vec<Option<String>>) -> Self {
        self.cells = slots;
        self
    }

    /// Attach a marker if the index is within the cells
    pub fn mark(mut self, label: &'static str, index: Option<usize>) -> Self {
        if let Some(index) = index.filter(|&i| i < self.cells.len()) {
            self.markers.push(Marker { label, index });
        }
        self
    }

    /// Labels of every marker pointing at `index`
    pub fn markers_at(&self, index: usize) -> Vec<&'static str> {
        self.markers
            .iter()
            .filter(|m| m.index == index)
            .map(|m| m.label)
            .collect()
    }

    /// Rough byte footprint used for the recorder's memory budget
    pub fn estimated_size(&self) -> usize {
        let cells: usize = self
            .cells
            .iter()
            .map(|c| c.as_ref().map_or(1, |s| s.len()) + 8)
            .sum();
        self.title.len() + cells + self.markers.len() * 16
    }

    /// One-line console rendering
    pub fn render_plain(&self) -> String {
        let mut out = format!("{}: ", self.title);
        let values: Vec<&str> = self
            .cells
            .iter()
            .map(|c| c.as_deref().unwrap_or("_"))
            .collect();

        match self.kind {
            ViewKind::Array => {
                out.push_str("[ ");
                out.push_str(&values.join(" | "));
                out.push_str(if values.is_empty() { "]" } else { " ]" });
            }
            ViewKind::Sequence => {
                let _ = write!(out, "[{}]", values.join(", "));
            }
            ViewKind::Linked => {
                for v in &values {
                    let _ = write!(out, "{} -> ", v);
                }
                out.push_str("null");
            }
            ViewKind::DoublyLinked => {
                out.push_str("null <- ");
                out.push_str(&values.join(" <-> "));
                out.push_str(if values.is_empty() { "null" } else { " -> null" });
            }
            ViewKind::Circular => {
                if let Some(first) = values.first() {
                    for v in &values {
                        let _ = write!(out, "{} -> ", v);
                    }
                    let _ = write!(out, "(back to {})", first);
                } else {
                    out.push_str("(empty)");
                }
            }
        }

        if !self.markers.is_empty() {
            let marks: Vec<String> = self
                .markers
                .iter()
                .map(|m| format!("{}={}", m.label, m.index))
                .collect();
            let _ = write!(out, "  ({})", marks.join(", "));
        }
        out
    }
}

/// Types that can be drawn in a snapshot
pub trait Visualize {
    fn view(&self) -> StructureView;
}

impl Visualize for StructureView {
    fn view(&self) -> StructureView {
        self.clone()
    }
}
