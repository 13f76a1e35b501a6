//! Error types for the container operations
//!
//! This module defines [`ContainerError`], the single error type returned by every
//! fallible operation in [`crate::collections`]. The textbook containers only have a
//! handful of ways to fail: operating on an empty container, pushing past a fixed
//! capacity, resetting a container that still holds values, indexing outside the
//! current length, and (for the index-linked lists) using a node handle whose node
//! has already been removed.

use std::fmt;

/// Errors that can occur while operating on a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Removal or inspection on an empty container
    Empty {
        container: &'static str,
        operation: &'static str,
    },

    /// Insertion into a full fixed-capacity container
    Full {
        container: &'static str,
        operation: &'static str,
        capacity: usize,
    },

    /// An operation that requires an empty container was called on a non-empty one
    NotEmpty {
        container: &'static str,
        operation: &'static str,
        len: usize,
    },

    /// Positional access outside the valid range
    IndexOutOfBounds { index: usize, len: usize },

    /// A bounded container was constructed with capacity 0
    ZeroCapacity { container: &'static str },

    /// A node handle that no longer refers to a live node
    StaleNode { index: usize },

    /// A node handle issued by a different container
    ForeignNode { index: usize },
}

impl ContainerError {
    pub(crate) fn empty(container: &'static str, operation: &'static str) -> Self {
        ContainerError::Empty {
            container,
            operation,
        }
    }

    pub(crate) fn full(container: &'static str, operation: &'static str, capacity: usize) -> Self {
        ContainerError::Full {
            container,
            operation,
            capacity,
        }
    }

    /// Whether this is the empty-container condition
    pub fn is_empty(&self) -> bool {
        matches!(self, ContainerError::Empty { .. })
    }

    /// Whether this is the full-container condition
    pub fn is_full(&self) -> bool {
        matches!(self, ContainerError::Full { .. })
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::Empty {
                container,
                operation,
            } => {
                write!(f, "{} underflow: cannot {} on an empty {}", container, operation, container)
            }
            ContainerError::Full {
                container,
                operation,
                capacity,
            } => {
                write!(
                    f,
                    "{} overflow: cannot {}, capacity {} reached",
                    container, operation, capacity
                )
            }
            ContainerError::NotEmpty {
                container,
                operation,
                len,
            } => {
                write!(
                    f,
                    "{} still holds {} element(s): cannot {} until it is empty",
                    container, len, operation
                )
            }
            ContainerError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            ContainerError::ZeroCapacity { container } => {
                write!(f, "{} capacity must be at least 1", container)
            }
            ContainerError::StaleNode { index } => {
                write!(f, "Node handle at slot {} refers to a removed node", index)
            }
            ContainerError::ForeignNode { index } => {
                write!(f, "Node handle at slot {} belongs to a different container", index)
            }
        }
    }
}

impl std::error::Error for ContainerError {}
