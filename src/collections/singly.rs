//! Singly linked list with owned nodes
//!
//! Each node owns the next one through `Option<Box<_>>`; the last node's link is
//! `None`. Front operations are O(1); anything touching the back or a position
//! walks the chain and is O(n).

use super::errors::ContainerError;
use crate::trace::{StructureView, ViewKind, Visualize};
use std::fmt::Display;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let node = self
            .head
            .take()
            .ok_or_else(|| ContainerError::empty("SinglyLinkedList", "pop_front"))?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("SinglyLinkedList", "pop_back"));
        }
        self.remove(self.len - 1)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Insert so that the new value ends up at `index` (0..=len)
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let slot = self.link_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Remove and return the value at `index` (0..len)
    pub fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        let len = self.len;
        if index >= len {
            return Err(ContainerError::IndexOutOfBounds { index, len });
        }
        let slot = self.link_at(index);
        let node = slot
            .take()
            .ok_or(ContainerError::IndexOutOfBounds { index, len })?;
        *slot = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn position<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(|v| predicate(v))
    }

    /// Reverse the links in place
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Middle element found with a slow and a fast cursor (upper middle for even lengths)
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();
        while let Some(next) = fast.and_then(|f| f.next.as_deref()) {
            fast = next.next.as_deref();
            slow = slow.next.as_deref()?;
        }
        Some(&slow.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// The link that currently points at position `index`
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        let mut cursor = &mut list.head;
        for value in iter {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            list.len += 1;
        }
        list
    }
}

/// Borrowing iterator
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Mutably borrowing iterator
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

/// Owning iterator
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Display> Visualize for SinglyLinkedList<T> {
    fn view(&self) -> StructureView {
        StructureView::new("SinglyLinkedList", ViewKind::Linked)
            .with_values(self.iter())
            .mark("head", (!self.is_empty()).then_some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &SinglyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_and_pop_both_ends() {
        let mut list = SinglyLinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_positional_insert_and_remove() {
        let mut list: SinglyLinkedList<i32> = [10, 30].into_iter().collect();
        list.insert(1, 20).unwrap();
        list.insert(3, 40).unwrap();
        assert_eq!(collect(&list), vec![10, 20, 30, 40]);
        assert_eq!(
            list.insert(9, 0),
            Err(ContainerError::IndexOutOfBounds { index: 9, len: 4 })
        );

        assert_eq!(list.remove(0), Ok(10));
        assert_eq!(list.remove(2), Ok(40));
        assert_eq!(collect(&list), vec![20, 30]);
        assert!(list.remove(2).is_err());
    }

    #[test]
    fn test_reverse_and_middle() {
        let mut list: SinglyLinkedList<i32> = (1..=5).collect();
        assert_eq!(list.middle(), Some(&3));
        list.reverse();
        assert_eq!(collect(&list), vec![5, 4, 3, 2, 1]);
        list.push_back(0);
        assert_eq!(list.middle(), Some(&2));
    }

    #[test]
    fn test_search_and_mutate() {
        let mut list: SinglyLinkedList<i32> = (1..=4).collect();
        assert!(list.contains(&3));
        assert_eq!(list.position(|&v| v > 2), Some(2));
        for v in list.iter_mut() {
            *v *= 10;
        }
        if let Some(v) = list.get_mut(0) {
            *v = 1;
        }
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 20, 30, 40]);
    }

    #[test]
    fn test_empty_list() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.pop_front().unwrap_err().is_empty());
        assert!(list.pop_back().unwrap_err().is_empty());
        assert_eq!(list.middle(), None);
        list.reverse();
        assert!(list.is_empty());
    }
}
