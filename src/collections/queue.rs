//! Queue implementations
//!
//! This module provides the FIFO containers:
//! - [`ArrayQueue`]: linear array queue; freed front slots are never reused
//! - [`CircularQueue`]: ring buffer that reuses freed slots via modular indexing
//! - [`LinkedQueue`]: unbounded queue of pooled nodes with head and tail links
//! - [`Deque`]: fixed-capacity ring buffer open at both ends
//!
//! # Linear vs. circular
//!
//! [`ArrayQueue`] advances `front` on every dequeue and `rear` on every enqueue.
//! Once `rear` hits the capacity the queue is full even if dequeues have opened
//! space at the front. [`CircularQueue`] wraps both indices with
//! `(i + 1) % capacity`, so every slot is usable again after a dequeue.

use super::errors::ContainerError;
use super::pool::{NodeId, NodePool};
use crate::trace::{StructureView, ViewKind, Visualize};
use std::fmt::Display;

/// Array queue without slot reuse
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    slots: Vec<Option<T>>,
    front: usize, // next slot to dequeue
    rear: usize,  // next slot to enqueue into
}

impl<T> ArrayQueue<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity {
                container: "ArrayQueue",
            });
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(ArrayQueue {
            slots,
            front: 0,
            rear: 0,
        })
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::full("ArrayQueue", "enqueue", self.capacity()));
        }
        self.slots[self.rear] = Some(value);
        self.rear += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("ArrayQueue", "dequeue"));
        }
        let value = self.slots[self.front]
            .take()
            .ok_or_else(|| ContainerError::empty("ArrayQueue", "dequeue"))?;
        self.front += 1;
        Ok(value)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.slots
            .get(self.front)
            .and_then(Option::as_ref)
            .filter(|_| !self.is_empty())
            .ok_or_else(|| ContainerError::empty("ArrayQueue", "front"))
    }

    pub fn len(&self) -> usize {
        self.rear - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Full once the rear index reaches the end, regardless of free front slots
    pub fn is_full(&self) -> bool {
        self.rear == self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Move both indices back to 0; only valid on an empty queue
    pub fn reset(&mut self) -> Result<(), ContainerError> {
        if !self.is_empty() {
            return Err(ContainerError::NotEmpty {
                container: "ArrayQueue",
                operation: "reset",
                len: self.len(),
            });
        }
        self.front = 0;
        self.rear = 0;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[self.front..self.rear].iter().flatten()
    }
}

impl<T: Display> Visualize for ArrayQueue<T> {
    fn view(&self) -> StructureView {
        let slots = self
            .slots
            .iter()
            .map(|s| s.as_ref().map(|v| v.to_string()))
            .collect();
        let rear = if self.is_empty() { None } else { Some(self.rear - 1) };
        StructureView::new(format!("ArrayQueue (cap {})", self.capacity()), ViewKind::Array)
            .with_slots(slots)
            .mark("front", (!self.is_empty()).then_some(self.front))
            .mark("rear", rear)
    }
}

/// Ring buffer queue
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity {
                container: "CircularQueue",
            });
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(CircularQueue {
            slots,
            head: 0,
            len: 0,
        })
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::full("CircularQueue", "enqueue", self.capacity()));
        }
        let tail = self.tail_index();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("CircularQueue", "dequeue"));
        }
        let value = self.slots[self.head]
            .take()
            .ok_or_else(|| ContainerError::empty("CircularQueue", "dequeue"))?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("CircularQueue", "front"));
        }
        self.slots[self.head]
            .as_ref()
            .ok_or_else(|| ContainerError::empty("CircularQueue", "front"))
    }

    pub fn rear(&self) -> Result<&T, ContainerError> {
        let rear = self
            .rear_index()
            .ok_or_else(|| ContainerError::empty("CircularQueue", "rear"))?;
        self.slots[rear]
            .as_ref()
            .ok_or_else(|| ContainerError::empty("CircularQueue", "rear"))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index of the front element
    pub fn head_index(&self) -> usize {
        self.head
    }

    /// Slot index of the last element, if any
    pub fn rear_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some((self.head + self.len - 1) % self.capacity())
        }
    }

    /// Raw slot occupancy in buffer order
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterate from front to rear
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % cap].as_ref())
    }

    fn tail_index(&self) -> usize {
        (self.head + self.len) % self.capacity()
    }
}

impl<T: Display> Visualize for CircularQueue<T> {
    fn view(&self) -> StructureView {
        let slots = self
            .slots
            .iter()
            .map(|s| s.as_ref().map(|v| v.to_string()))
            .collect();
        StructureView::new(
            format!("CircularQueue (cap {})", self.capacity()),
            ViewKind::Array,
        )
        .with_slots(slots)
        .mark("front", (!self.is_empty()).then_some(self.head))
        .mark("rear", self.rear_index())
    }
}

#[derive(Debug, Clone)]
struct QueueNode<T> {
    value: T,
    next: Option<NodeId>,
}

/// Unbounded queue of linked nodes
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    pool: NodePool<QueueNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        LinkedQueue {
            pool: NodePool::new(),
            head: None,
            tail: None,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let id = self.pool.alloc(QueueNode { value, next: None });
        match self.tail {
            Some(tail) => {
                if let Ok(node) = self.pool.get_mut(tail) {
                    node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let head = self
            .head
            .ok_or_else(|| ContainerError::empty("LinkedQueue", "dequeue"))?;
        let node = self.pool.free(head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.value)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        let head = self
            .head
            .ok_or_else(|| ContainerError::empty("LinkedQueue", "front"))?;
        Ok(&self.pool.get(head)?.value)
    }

    pub fn rear(&self) -> Result<&T, ContainerError> {
        let tail = self
            .tail
            .ok_or_else(|| ContainerError::empty("LinkedQueue", "rear"))?;
        Ok(&self.pool.get(tail)?.value)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.pool.get(cursor?).ok()?;
            cursor = node.next;
            Some(&node.value)
        })
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Visualize for LinkedQueue<T> {
    fn view(&self) -> StructureView {
        StructureView::new("LinkedQueue", ViewKind::Linked)
            .with_values(self.iter())
            .mark("front", (!self.is_empty()).then_some(0))
            .mark("rear", self.len().checked_sub(1))
    }
}

/// Fixed-capacity double-ended queue
#[derive(Debug, Clone)]
pub struct Deque<T> {
    ring: CircularQueue<T>,
}

impl<T> Deque<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity { container: "Deque" });
        }
        Ok(Deque {
            ring: CircularQueue::with_capacity(capacity)?,
        })
    }

    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        if self.ring.is_full() {
            return Err(ContainerError::full("Deque", "push_back", self.capacity()));
        }
        self.ring.enqueue(value)
    }

    pub fn push_front(&mut self, value: T) -> Result<(), ContainerError> {
        if self.ring.is_full() {
            return Err(ContainerError::full("Deque", "push_front", self.capacity()));
        }
        let cap = self.capacity();
        self.ring.head = (self.ring.head + cap - 1) % cap;
        self.ring.slots[self.ring.head] = Some(value);
        self.ring.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        if self.ring.is_empty() {
            return Err(ContainerError::empty("Deque", "pop_front"));
        }
        self.ring.dequeue()
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let rear = self
            .ring
            .rear_index()
            .ok_or_else(|| ContainerError::empty("Deque", "pop_back"))?;
        let value = self.ring.slots[rear]
            .take()
            .ok_or_else(|| ContainerError::empty("Deque", "pop_back"))?;
        self.ring.len -= 1;
        Ok(value)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.ring
            .front()
            .map_err(|_| ContainerError::empty("Deque", "front"))
    }

    pub fn back(&self) -> Result<&T, ContainerError> {
        self.ring
            .rear()
            .map_err(|_| ContainerError::empty("Deque", "back"))
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ring.iter()
    }
}

impl<T: Display> Visualize for Deque<T> {
    fn view(&self) -> StructureView {
        let mut view = self.ring.view();
        view.title = format!("Deque (cap {})", self.capacity());
        for marker in &mut view.markers {
            marker.label = match marker.label {
                "rear" => "back",
                other => other,
            };
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_queue_fifo() {
        let mut queue = ArrayQueue::with_capacity(3).unwrap();
        for i in 1..=3 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(queue.dequeue().unwrap_err().is_empty());
    }

    #[test]
    fn test_array_queue_does_not_reuse_slots() {
        let mut queue = ArrayQueue::with_capacity(2).unwrap();
        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.len(), 1);
        assert!(queue.enqueue('c').unwrap_err().is_full());

        assert_eq!(
            queue.reset(),
            Err(ContainerError::NotEmpty {
                container: "ArrayQueue",
                operation: "reset",
                len: 1,
            })
        );

        queue.dequeue().unwrap();
        queue.reset().unwrap();
        assert!(queue.enqueue('c').is_ok());
    }

    #[test]
    fn test_circular_queue_reuses_freed_slot() {
        let mut queue = CircularQueue::with_capacity(3).unwrap();
        for i in 1..=3 {
            queue.enqueue(i).unwrap();
        }
        assert!(queue.enqueue(4).unwrap_err().is_full());

        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(4).unwrap();
        assert_eq!(queue.rear_index(), Some(0));
        assert_eq!(queue.head_index(), 1);
        let items: Vec<_> = queue.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
        assert_eq!(queue.front(), Ok(&2));
        assert_eq!(queue.rear(), Ok(&4));
    }

    #[test]
    fn test_linked_queue_fifo() {
        let mut queue = LinkedQueue::new();
        queue.enqueue("x");
        queue.enqueue("y");
        assert_eq!(queue.rear(), Ok(&"y"));
        assert_eq!(queue.dequeue(), Ok("x"));
        assert_eq!(queue.dequeue(), Ok("y"));
        assert!(queue.is_empty());
        assert!(queue.rear().is_err());
        queue.enqueue("z");
        assert_eq!(queue.front(), Ok(&"z"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_deque_both_ends() {
        let mut deque = Deque::with_capacity(3).unwrap();
        deque.push_back(2).unwrap();
        deque.push_front(1).unwrap();
        deque.push_back(3).unwrap();
        assert!(deque.push_front(0).unwrap_err().is_full());
        let items: Vec<_> = deque.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(deque.pop_back(), Ok(3));
        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.back(), Ok(&2));
        assert_eq!(deque.front(), Ok(&2));
    }
}
