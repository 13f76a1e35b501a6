//! Stack implementations
//!
//! This module provides the LIFO containers:
//! - [`ArrayStack`]: fixed-capacity, array-backed; push fails once full
//! - [`LinkedStack`]: unbounded, a chain of owned nodes with the top at the head
//! - [`MinStack`]: a stack that also answers "smallest element" in O(1)
//!
//! Every operation here is O(1). Pop and peek on an empty stack return
//! [`ContainerError::Empty`]; pushing onto a full [`ArrayStack`] returns
//! [`ContainerError::Full`] and leaves the stack unchanged.

use super::errors::ContainerError;
use crate::trace::{StructureView, ViewKind, Visualize};
use std::fmt::Display;

/// Fixed-capacity stack stored in a contiguous buffer
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Create an empty stack holding at most `capacity` elements
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity {
                container: "ArrayStack",
            });
        }
        Ok(ArrayStack {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::full("ArrayStack", "push", self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop()
            .ok_or_else(|| ContainerError::empty("ArrayStack", "pop"))
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .last()
            .ok_or_else(|| ContainerError::empty("ArrayStack", "peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.items
            .last_mut()
            .ok_or_else(|| ContainerError::empty("ArrayStack", "peek"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }

    /// Index of the top element in the backing buffer
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

impl<T: Display> Visualize for ArrayStack<T> {
    fn view(&self) -> StructureView {
        let mut slots: Vec<Option<String>> = self.items.iter().map(|v| Some(v.to_string())).collect();
        slots.resize(self.capacity, None);
        StructureView::new(format!("ArrayStack (cap {})", self.capacity), ViewKind::Array)
            .with_slots(slots)
            .mark("top", self.top_index())
    }
}

struct StackNode<T> {
    value: T,
    next: Option<Box<StackNode<T>>>,
}

/// Unbounded stack of linked nodes
pub struct LinkedStack<T> {
    head: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        LinkedStack { head: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let node = Box::new(StackNode {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let node = self
            .head
            .take()
            .ok_or_else(|| ContainerError::empty("LinkedStack", "pop"))?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or_else(|| ContainerError::empty("LinkedStack", "peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.head
            .as_mut()
            .map(|node| &mut node.value)
            .ok_or_else(|| ContainerError::empty("LinkedStack", "peek"))
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

    /// Iterate from top to bottom
    pub fn iter(&self) -> LinkedStackIter<'_, T> {
        LinkedStackIter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Borrowing iterator over a [`LinkedStack`]
pub struct LinkedStackIter<'a, T> {
    next: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for LinkedStackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T: Display> Visualize for LinkedStack<T> {
    fn view(&self) -> StructureView {
        let view = StructureView::new("LinkedStack", ViewKind::Linked).with_values(self.iter());
        let top = if self.is_empty() { None } else { Some(0) };
        view.mark("top", top)
    }
}

/// Stack with constant-time minimum lookup
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    items: Vec<T>,
    minima: Vec<T>, // minima[i] = min(items[..=i])
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        MinStack {
            items: Vec::new(),
            minima: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        let min = match self.minima.last() {
            Some(current) if *current < value => current.clone(),
            _ => value.clone(),
        };
        self.items.push(value);
        self.minima.push(min);
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let value = self
            .items
            .pop()
            .ok_or_else(|| ContainerError::empty("MinStack", "pop"))?;
        self.minima.pop();
        Ok(value)
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .last()
            .ok_or_else(|| ContainerError::empty("MinStack", "peek"))
    }

    pub fn min(&self) -> Result<&T, ContainerError> {
        self.minima
            .last()
            .ok_or_else(|| ContainerError::empty("MinStack", "min"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone + Display> Visualize for MinStack<T> {
    fn view(&self) -> StructureView {
        StructureView::new("MinStack", ViewKind::Array)
            .with_values(self.items.iter())
            .mark("top", self.items.len().checked_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_stack_lifo() {
        let mut stack = ArrayStack::with_capacity(3).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.pop().unwrap_err().is_empty());
    }

    #[test]
    fn test_array_stack_overflow_leaves_contents() {
        let mut stack = ArrayStack::with_capacity(2).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        let err = stack.push('c').unwrap_err();
        assert_eq!(
            err,
            ContainerError::Full {
                container: "ArrayStack",
                operation: "push",
                capacity: 2
            }
        );
        assert_eq!(stack.peek(), Ok(&'b'));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_array_stack_zero_capacity() {
        assert!(ArrayStack::<i32>::with_capacity(0).is_err());
    }

    #[test]
    fn test_linked_stack_iter_and_peek_mut() {
        let mut stack = LinkedStack::new();
        for i in 1..=3 {
            stack.push(i);
        }
        *stack.peek_mut().unwrap() = 30;
        let items: Vec<_> = stack.iter().copied().collect();
        assert_eq!(items, vec![30, 2, 1]);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_linked_stack_long_drop() {
        let mut stack = LinkedStack::new();
        for i in 0..200_000 {
            stack.push(i);
        }
        drop(stack);
    }

    #[test]
    fn test_min_stack_tracks_minimum() {
        let mut stack = MinStack::new();
        stack.push(5);
        stack.push(3);
        stack.push(7);
        stack.push(3);
        assert_eq!(stack.min(), Ok(&3));
        stack.pop().unwrap();
        assert_eq!(stack.min(), Ok(&3));
        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.min(), Ok(&5));
    }
}
