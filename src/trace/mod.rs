// Snapshot recording for step-through playback

pub mod view;

pub use view::{Marker, StructureView, ViewKind, Visualize};

use crate::algorithms::expression::ExprError;
use crate::collections::errors::ContainerError;
use std::fmt;

/// Recorded console for capturing demo output
#[derive(Debug, Clone)]
pub struct Console {
    pub lines: Vec<ConsoleLine>,
}

impl Console {
    pub fn new() -> Self {
        Console { lines: Vec::new() }
    }

    /// Print without newline
    pub fn print(&mut self, text: &str, step: usize) {
        if let Some(last) = self.lines.last_mut() {
            if last.step == step && !last.text.ends_with('\n') {
                last.text.push_str(text);
                return;
            }
        }
        self.lines.push(ConsoleLine {
            text: text.to_string(),
            step,
        });
    }

    pub fn println(&mut self, text: &str, step: usize) {
        self.print(&format!("{}\n", text), step);
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        Self::split_lines(&self.lines)
    }

    /// Output visible at a given step (everything printed up to and including it)
    pub fn output_until(&self, step: usize) -> Vec<String> {
        let end = self.lines.partition_point(|l| l.step <= step);
        Self::split_lines(&self.lines[..end])
    }

    fn split_lines(lines: &[ConsoleLine]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|cl| {
                let mut result: Vec<String> = cl.text.split('\n').map(|s| s.to_string()).collect();
                // Remove trailing empty string if text ended with newline
                if result.last().is_some_and(|s| s.is_empty()) {
                    result.pop();
                }
                result
            })
            .collect()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// A chunk of console output tagged with the step that printed it
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub text: String,
    pub step: usize,
}

/// Result of the operation a snapshot was taken after
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Completed with nothing to report
    Done,
    /// Completed and produced a value
    Value(String),
    /// Rejected by the container (underflow, overflow, ...)
    Error(String),
}

impl Outcome {
    pub fn from_result<T: fmt::Display, E: fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Value(v.to_string()),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    /// Like [`Outcome::from_result`] for operations returning `()`
    pub fn from_unit<E: fmt::Display>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => Outcome::Done,
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "ok"),
            Outcome::Value(v) => write!(f, "-> {}", v),
            Outcome::Error(e) => write!(f, "error: {}", e),
        }
    }
}

/// State of every visualised structure after one operation
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub step: usize,
    pub operation: String,
    pub outcome: Outcome,
    pub structures: Vec<StructureView>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let views: usize = self.structures.iter().map(|s| s.estimated_size()).sum();
        self.operation.len() + 32 + views
    }

    /// Console form of this step
    pub fn render_plain(&self) -> String {
        let mut out = format!("[{}] {}  {}\n", self.step, self.operation, self.outcome);
        for view in &self.structures {
            out.push_str("    ");
            out.push_str(&view.render_plain());
            out.push('\n');
        }
        out
    }
}

/// Errors raised while recording a demo
#[derive(Debug, Clone)]
pub enum TraceError {
    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// A container operation the demo expected to succeed failed
    Container(ContainerError),

    /// An expression the demo expected to parse was rejected
    Expression(ExprError),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            TraceError::Container(e) => write!(f, "{}", e),
            TraceError::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<ContainerError> for TraceError {
    fn from(e: ContainerError) -> Self {
        TraceError::Container(e)
    }
}

impl From<ExprError> for TraceError {
    fn from(e: ExprError) -> Self {
        TraceError::Expression(e)
    }
}

/// Builds a [`Trace`] one operation at a time
#[derive(Debug)]
pub struct Recorder {
    title: String,
    snapshots: Vec<Snapshot>,
    console: Console,
    max_memory: usize,
    current_memory: usize,
}

impl Recorder {
    pub fn new(title: impl Into<String>, max_memory: usize) -> Self {
        Recorder {
            title: title.into(),
            snapshots: Vec::new(),
            console: Console::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot of `structures` taken after `operation`
    pub fn record(
        &mut self,
        operation: impl Into<String>,
        outcome: Outcome,
        structures: &[&dyn Visualize],
    ) -> Result<(), TraceError> {
        let snapshot = Snapshot {
            step: self.snapshots.len(),
            operation: operation.into(),
            outcome,
            structures: structures.iter().map(|s| s.view()).collect(),
        };
        self.charge(snapshot.estimated_size())?;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Print a console line attributed to the most recent snapshot
    ///
    /// Console text shares the snapshot memory budget.
    pub fn println(&mut self, text: impl AsRef<str>) -> Result<(), TraceError> {
        let text = text.as_ref();
        self.charge(text.len() + 1)?;
        let step = self.snapshots.len().saturating_sub(1);
        self.console.println(text, step);
        Ok(())
    }

    fn charge(&mut self, bytes: usize) -> Result<(), TraceError> {
        let total = self.current_memory.saturating_add(bytes);
        if total > self.max_memory {
            return Err(TraceError::SnapshotLimitExceeded {
                current: total,
                limit: self.max_memory,
            });
        }
        self.current_memory = total;
        Ok(())
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn finish(self) -> Trace {
        Trace {
            title: self.title,
            snapshots: self.snapshots,
            console: self.console,
        }
    }
}

/// A recorded demo: ordered snapshots plus everything it printed
#[derive(Debug, Clone)]
pub struct Trace {
    pub title: String,
    snapshots: Vec<Snapshot>,
    console: Console,
}

impl Trace {
    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Every step followed by the console output it produced
    pub fn render_plain(&self) -> String {
        let mut out = format!("=== {} ===\n", self.title);
        for snapshot in &self.snapshots {
            out.push_str(&snapshot.render_plain());
            for line in self
                .console
                .lines
                .iter()
                .filter(|l| l.step == snapshot.step)
            {
                for text in line.text.lines() {
                    out.push_str("    > ");
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_joins_same_step() {
        let mut console = Console::new();
        console.print("a", 0);
        console.print("b\n", 0);
        console.println("c", 0);
        console.println("d", 2);
        assert_eq!(console.get_output(), vec!["ab", "c", "d"]);
        assert_eq!(console.output_until(1), vec!["ab", "c"]);
    }

    #[test]
    fn test_recorder_limit() {
        let view = StructureView::new("Stack", ViewKind::Array).with_values([1, 2, 3]);
        let mut recorder = Recorder::new("limit", 100);
        let first = recorder.record("push 3", Outcome::Done, &[&view]);
        assert!(first.is_ok());
        let second = recorder.record("push 4 with a long description", Outcome::Done, &[&view]);
        assert!(matches!(
            second,
            Err(TraceError::SnapshotLimitExceeded { limit: 100, .. })
        ));
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_println_attaches_to_last_step() {
        let mut recorder = Recorder::new("t", usize::MAX);
        recorder.println("before any step").unwrap();
        recorder.record("op", Outcome::Value("1".into()), &[]).unwrap();
        recorder.println("after").unwrap();
        let trace = recorder.finish();
        let plain = trace.render_plain();
        assert!(plain.contains("[0] op  -> 1"));
        assert!(plain.contains("    > after"));
    }

    #[test]
    fn test_console_counts_against_limit() {
        let mut recorder = Recorder::new("console", 64);
        recorder.record("op", Outcome::Done, &[]).unwrap();
        let after_snapshot = recorder.memory_usage();

        recorder.println("0123456789").unwrap();
        assert_eq!(recorder.memory_usage(), after_snapshot + 11);

        let long = "x".repeat(64);
        assert!(matches!(
            recorder.println(&long),
            Err(TraceError::SnapshotLimitExceeded { limit: 64, .. })
        ));
        // rejected text is not captured
        assert_eq!(recorder.finish().console().get_output(), vec!["0123456789"]);
    }
}
