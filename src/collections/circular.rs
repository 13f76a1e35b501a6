//! Circular singly linked list
//!
//! Only the tail handle is stored; the head is always `tail.next`, so both
//! `push_front` and `push_back` are O(1). The last node links back to the first,
//! which means iteration has to stop after exactly `len` nodes.

use super::errors::ContainerError;
use super::pool::{NodeId, NodePool};
use crate::trace::{StructureView, ViewKind, Visualize};
use std::fmt::Display;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: NodeId,
}

/// Circular singly linked list
#[derive(Debug, Clone)]
pub struct CircularLinkedList<T> {
    pool: NodePool<Node<T>>,
    tail: Option<NodeId>,
}

impl<T> CircularLinkedList<T> {
    pub fn new() -> Self {
        CircularLinkedList {
            pool: NodePool::new(),
            tail: None,
        }
    }

    pub fn push_front(&mut self, value: T) -> Result<(), ContainerError> {
        match self.tail {
            Some(tail) => {
                let head = self.pool.get(tail)?.next;
                let id = self.pool.alloc(Node { value, next: head });
                self.pool.get_mut(tail)?.next = id;
            }
            None => self.push_first(value),
        }
        Ok(())
    }

    /// Insert at the back: a front insertion followed by moving the tail forward
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        self.push_front(value)?;
        self.rotate()
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let tail = self
            .tail
            .ok_or_else(|| ContainerError::empty("CircularLinkedList", "pop_front"))?;
        let head = self.pool.get(tail)?.next;
        if head == tail {
            self.tail = None;
            return Ok(self.pool.free(head)?.value);
        }
        let node = self.pool.free(head)?;
        self.pool.get_mut(tail)?.next = node.next;
        Ok(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        let tail = self.tail?;
        let head = self.pool.get(tail).ok()?.next;
        self.pool.get(head).ok().map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.pool.get(self.tail?).ok().map(|node| &node.value)
    }

    /// Advance the head by one node; the old head becomes the tail
    pub fn rotate(&mut self) -> Result<(), ContainerError> {
        if let Some(tail) = self.tail {
            self.tail = Some(self.pool.get(tail)?.next);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Iterate exactly one lap, head first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self
            .tail
            .and_then(|tail| self.pool.get(tail).ok())
            .map(|node| node.next);
        let mut remaining = self.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let node = self.pool.get(cursor?).ok()?;
            cursor = Some(node.next);
            Some(&node.value)
        })
    }

    /// Josephus elimination: repeatedly count `k` nodes around the ring and
    /// remove the one landed on, returning values in removal order
    pub fn remove_every(&mut self, k: usize) -> Result<Vec<T>, ContainerError> {
        if k == 0 {
            return Err(ContainerError::IndexOutOfBounds {
                index: 0,
                len: self.len(),
            });
        }
        let mut removed = Vec::with_capacity(self.len());
        while !self.is_empty() {
            for _ in 1..k {
                self.rotate()?;
            }
            removed.push(self.pop_front()?);
        }
        Ok(removed)
    }

    fn push_first(&mut self, value: T) {
        // A lone node links to itself
        let id = self.pool.alloc_cyclic(|id| Node { value, next: id });
        self.tail = Some(id);
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularLinkedList::new();
        for value in iter {
            // Freshly built lists never hold stale handles
            let _ = list.push_back(value);
        }
        list
    }
}

impl<T: Display> Visualize for CircularLinkedList<T> {
    fn view(&self) -> StructureView {
        StructureView::new("CircularLinkedList", ViewKind::Circular)
            .with_values(self.iter())
            .mark("head", (!self.is_empty()).then_some(0))
            .mark("tail", self.len().checked_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_lap_iteration() {
        let list: CircularLinkedList<i32> = (1..=4).collect();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&4));
    }

    #[test]
    fn test_rotate_and_pop() {
        let mut list: CircularLinkedList<i32> = (1..=3).collect();
        list.rotate().unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
        list.push_front(0).unwrap();
        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(3));
        assert_eq!(list.pop_front(), Ok(1));
        assert!(list.pop_front().unwrap_err().is_empty());
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_josephus_order() {
        let mut ring: CircularLinkedList<i32> = (1..=7).collect();
        assert_eq!(ring.remove_every(3), Ok(vec![3, 6, 2, 7, 5, 1, 4]));
        assert!(ring.is_empty());
    }
}
