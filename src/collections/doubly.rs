//! Doubly linked list
//!
//! Nodes live in a [`NodePool`] and link to both neighbours by [`NodeId`]. The
//! head's `prev` and the tail's `next` are `None`, and for every interior node
//! `prev(next(n)) == n`. Handles returned by the push and insert operations stay
//! valid until that node is removed, which gives O(1) insertion and removal at a
//! known position. A handle only works on the list that returned it (or a clone
//! of that list); any other list rejects it with [`ContainerError::ForeignNode`].

use super::errors::ContainerError;
use super::pool::{NodeId, NodePool};
use crate::trace::{StructureView, ViewKind, Visualize};
use std::fmt::Display;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly linked list
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    pool: NodePool<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        DoublyLinkedList {
            pool: NodePool::new(),
            head: None,
            tail: None,
        }
    }

    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.pool.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.set_prev(old, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.pool.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.set_next(old, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self
            .head
            .ok_or_else(|| ContainerError::empty("DoublyLinkedList", "pop_front"))?;
        self.remove(head)
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let tail = self
            .tail
            .ok_or_else(|| ContainerError::empty("DoublyLinkedList", "pop_back"))?;
        self.remove(tail)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Insert a new node right after `at`
    pub fn insert_after(&mut self, at: NodeId, value: T) -> Result<NodeId, ContainerError> {
        let next = self.pool.get(at)?.next;
        let id = self.pool.alloc(Node {
            value,
            prev: Some(at),
            next,
        });
        self.set_next(at, Some(id));
        match next {
            Some(n) => self.set_prev(n, Some(id)),
            None => self.tail = Some(id),
        }
        Ok(id)
    }

    /// Insert a new node right before `at`
    pub fn insert_before(&mut self, at: NodeId, value: T) -> Result<NodeId, ContainerError> {
        let prev = self.pool.get(at)?.prev;
        let id = self.pool.alloc(Node {
            value,
            prev,
            next: Some(at),
        });
        self.set_prev(at, Some(id));
        match prev {
            Some(p) => self.set_next(p, Some(id)),
            None => self.head = Some(id),
        }
        Ok(id)
    }

    /// Unlink a node and return its value
    pub fn remove(&mut self, id: NodeId) -> Result<T, ContainerError> {
        let node = self.pool.free(id)?;
        match node.prev {
            Some(p) => self.set_next(p, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.set_prev(n, node.prev),
            None => self.tail = node.prev,
        }
        Ok(node.value)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.pool.get(id).ok().map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.pool.get_mut(id).ok().map(|node| &mut node.value)
    }

    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.pool.get(id).ok().and_then(|node| node.next)
    }

    pub fn prev_id(&self, id: NodeId) -> Option<NodeId> {
        self.pool.get(id).ok().and_then(|node| node.prev)
    }

    /// Handle of the first node whose value matches
    pub fn find<F>(&self, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.pool.get(id).ok()?;
            if predicate(&node.value) {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        self.pool.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterate head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.walk(self.head, |node| node.next)
    }

    /// Iterate tail to head
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> + '_ {
        self.walk(self.tail, |node| node.prev)
    }

    fn walk<'a>(
        &'a self,
        start: Option<NodeId>,
        step: fn(&Node<T>) -> Option<NodeId>,
    ) -> impl Iterator<Item = &'a T> + 'a {
        let mut cursor = start;
        std::iter::from_fn(move || {
            let node = self.pool.get(cursor?).ok()?;
            cursor = step(node);
            Some(&node.value)
        })
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Ok(node) = self.pool.get_mut(id) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Ok(node) = self.pool.get_mut(id) {
            node.prev = prev;
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T: Display> Visualize for DoublyLinkedList<T> {
    fn view(&self) -> StructureView {
        StructureView::new("DoublyLinkedList", ViewKind::DoublyLinked)
            .with_values(self.iter())
            .mark("head", (!self.is_empty()).then_some(0))
            .mark("tail", self.len().checked_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bidirectional_iteration() {
        let list: DoublyLinkedList<i32> = (1..=4).collect();
        let forward: Vec<_> = list.iter().copied().collect();
        let mut backward: Vec<_> = list.iter_rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, vec![1, 2, 3, 4]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_insert_around_handle() {
        let mut list = DoublyLinkedList::new();
        let b = list.push_back('b');
        list.insert_before(b, 'a').unwrap();
        let c = list.insert_after(b, 'c').unwrap();
        list.insert_after(c, 'd').unwrap();
        assert_eq!(list.iter().collect::<String>(), "abcd");
        assert_eq!(list.back(), Some(&'d'));
        assert_eq!(list.front(), Some(&'a'));
        assert_eq!(list.prev_id(c), Some(b));
        assert_eq!(list.next_id(b), Some(c));
    }

    #[test]
    fn test_remove_keeps_links_consistent() {
        let mut list: DoublyLinkedList<i32> = (1..=3).collect();
        let two = list.find(|&v| v == 2).unwrap();
        assert_eq!(list.remove(two), Ok(2));
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![3, 1]);
        assert!(list.remove(two).is_err());

        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.head_id(), None);
        assert_eq!(list.tail_id(), None);
        assert!(list.pop_front().unwrap_err().is_empty());
    }
}
