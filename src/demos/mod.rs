//! Lesson programs
//!
//! Each demo is a short script that drives one or two containers (or an
//! algorithm) through the textbook operations, including the failure cases,
//! and records a [`Snapshot`](crate::trace::Snapshot) after every operation.
//!
//! - [`stacks`]: array stack, linked stack, min stack
//! - [`queues`]: linear queue, circular queue, linked queue, deque
//! - [`lists`]: singly, doubly and circular linked lists
//! - [`techniques`]: monotonic stack, expressions, Hanoi, prefix sums, strings

mod lists;
mod queues;
mod stacks;
mod techniques;

use crate::trace::{Recorder, StructureView, Trace, TraceError, ViewKind};

/// Every demo the binary can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Stack,
    MinStack,
    LinearQueue,
    CircularQueue,
    LinkedQueue,
    Deque,
    SinglyList,
    DoublyList,
    CircularList,
    Monotonic,
    Expression,
    Hanoi,
    PrefixSum,
    Strings,
}

impl Demo {
    pub const ALL: [Demo; 14] = [
        Demo::Stack,
        Demo::MinStack,
        Demo::LinearQueue,
        Demo::CircularQueue,
        Demo::LinkedQueue,
        Demo::Deque,
        Demo::SinglyList,
        Demo::DoublyList,
        Demo::CircularList,
        Demo::Monotonic,
        Demo::Expression,
        Demo::Hanoi,
        Demo::PrefixSum,
        Demo::Strings,
    ];

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Demo::Stack => "stack",
            Demo::MinStack => "min-stack",
            Demo::LinearQueue => "linear-queue",
            Demo::CircularQueue => "circular-queue",
            Demo::LinkedQueue => "linked-queue",
            Demo::Deque => "deque",
            Demo::SinglyList => "singly-list",
            Demo::DoublyList => "doubly-list",
            Demo::CircularList => "circular-list",
            Demo::Monotonic => "monotonic",
            Demo::Expression => "expression",
            Demo::Hanoi => "hanoi",
            Demo::PrefixSum => "prefix-sum",
            Demo::Strings => "strings",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::Stack => "Array-backed and linked stacks: push, pop, peek, overflow, underflow",
            Demo::MinStack => "Stack with constant-time minimum",
            Demo::LinearQueue => "Linear array queue and why it wastes freed slots",
            Demo::CircularQueue => "Circular buffer queue reusing freed slots",
            Demo::LinkedQueue => "Unbounded queue with head and tail links",
            Demo::Deque => "Double-ended queue on a ring buffer",
            Demo::SinglyList => "Singly linked list: insert, remove, search, reverse",
            Demo::DoublyList => "Doubly linked list: handles, both directions",
            Demo::CircularList => "Circular linked list and the Josephus problem",
            Demo::Monotonic => "Monotonic stack: next warmer day",
            Demo::Expression => "Balanced brackets and postfix evaluation with a stack",
            Demo::Hanoi => "Recursive Tower of Hanoi on three stacks",
            Demo::PrefixSum => "Prefix sums, range queries and sliding windows",
            Demo::Strings => "Two-pointer palindrome check and string counting",
        }
    }

    pub fn from_name(name: &str) -> Option<Demo> {
        Demo::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Record the demo with the given snapshot memory budget
    pub fn run(self, snapshot_limit: usize) -> Result<Trace, TraceError> {
        let mut rec = Recorder::new(self.description(), snapshot_limit);
        match self {
            Demo::Stack => stacks::array_and_linked(&mut rec)?,
            Demo::MinStack => stacks::min_stack(&mut rec)?,
            Demo::LinearQueue => queues::linear(&mut rec)?,
            Demo::CircularQueue => queues::circular(&mut rec)?,
            Demo::LinkedQueue => queues::linked(&mut rec)?,
            Demo::Deque => queues::deque(&mut rec)?,
            Demo::SinglyList => lists::singly(&mut rec)?,
            Demo::DoublyList => lists::doubly(&mut rec)?,
            Demo::CircularList => lists::circular(&mut rec)?,
            Demo::Monotonic => techniques::monotonic(&mut rec)?,
            Demo::Expression => techniques::expression(&mut rec)?,
            Demo::Hanoi => techniques::hanoi(&mut rec)?,
            Demo::PrefixSum => techniques::prefix_sum(&mut rec)?,
            Demo::Strings => techniques::strings(&mut rec)?,
        }
        Ok(rec.finish())
    }
}

/// A plain sequence view with optional markers
pub(crate) fn sequence<I, T>(title: &str, values: I) -> StructureView
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    StructureView::new(title, ViewKind::Sequence).with_values(values)
}

/// Render an optional answer as the value or a dash
pub(crate) fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(Demo::from_name(demo.name()), Some(demo));
        }
        assert_eq!(Demo::from_name("heap"), None);
    }
}
