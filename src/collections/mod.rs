//! Linear containers
//!
//! This module provides the textbook containers and their shared pieces:
//! - [`stack`]: array-backed, linked and min-tracking stacks (LIFO)
//! - [`queue`]: linear, circular, linked and double-ended queues (FIFO)
//! - [`singly`], [`doubly`], [`circular`]: the three linked list shapes
//! - [`pool`]: generational node storage for the index-linked containers
//! - [`errors`]: [`ContainerError`], returned by every fallible operation
//!
//! # Complexity
//!
//! | Container            | insert            | remove            | peek |
//! |----------------------|-------------------|-------------------|------|
//! | `ArrayStack`         | O(1) push         | O(1) pop          | O(1) |
//! | `CircularQueue`      | O(1) enqueue      | O(1) dequeue      | O(1) |
//! | `SinglyLinkedList`   | O(1) front / O(n) | O(1) front / O(n) | O(1) |
//! | `DoublyLinkedList`   | O(1) at a handle  | O(1) at a handle  | O(1) |
//! | `CircularLinkedList` | O(1) both ends    | O(1) front        | O(1) |
//!
//! Every container implements [`crate::trace::Visualize`] so demos can snapshot it.

pub mod circular;
pub mod doubly;
pub mod errors;
pub mod pool;
pub mod queue;
pub mod singly;
pub mod stack;

pub use circular::CircularLinkedList;
pub use doubly::DoublyLinkedList;
pub use errors::ContainerError;
pub use pool::{NodeId, NodePool};
pub use queue::{ArrayQueue, CircularQueue, Deque, LinkedQueue};
pub use singly::SinglyLinkedList;
pub use stack::{ArrayStack, LinkedStack, MinStack};
