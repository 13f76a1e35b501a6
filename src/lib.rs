//! # Introduction
//!
//! dsatty is a step-through visualizer for introductory data structures. Each
//! lesson ("demo") drives a container or algorithm through its textbook
//! operations, capturing a snapshot of every structure after each operation.
//! The snapshot history is then navigated forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui), or printed as
//! plain text.
//!
//! ## Pipeline
//!
//! ```text
//! Demo → containers / algorithms → Recorder → Trace → Player → TUI
//!                                                   ↘ plain console
//! ```
//!
//! 1. [`collections`]: the containers themselves (array and linked stacks,
//!    linear/circular/linked queues, deque, singly/doubly/circular lists) and
//!    the generational [`collections::NodePool`] the index-linked lists live in.
//! 2. [`algorithms`]: monotonic stacks, expression evaluation, recursion, and
//!    array and string techniques.
//! 3. [`trace`]: [`trace::Visualize`] views, the [`trace::Recorder`] with its
//!    snapshot memory limit, and the captured console output.
//! 4. [`demos`]: the lesson scripts.
//! 5. [`player`]: cursor over a recorded trace.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod collections;
pub mod constants;
pub mod demos;
pub mod player;
pub mod trace;
pub mod ui;
