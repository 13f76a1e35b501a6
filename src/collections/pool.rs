//! Slot pool backing the index-linked containers
//!
//! Doubly linked and circular lists need more than one link into the same node,
//! which `Box` ownership cannot express. Instead their nodes live in a
//! [`NodePool`]: a vector of slots addressed by [`NodeId`] handles. Links are just
//! handles, so cycles and back-pointers are plain data.
//!
//! # Slot reuse
//!
//! Freed slots go on a free list and are handed out again by the next
//! [`NodePool::alloc`]. Every slot carries a generation counter that is bumped on
//! free, so a handle to a removed node is detected as stale instead of silently
//! aliasing whatever node reused the slot.
//!
//! # Pool identity
//!
//! Each pool created by [`NodePool::new`] gets a fresh id, and every handle
//! records the pool that issued it. Passing a handle to a different pool fails
//! with [`ContainerError::ForeignNode`] instead of touching the node that
//! happens to sit at the same slot. A cloned pool keeps its id, since its slots
//! hold the same nodes the original's handles point at.

use super::errors::ContainerError;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node stored in a [`NodePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pool: u64,
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Raw slot index (for display only)
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
enum Slot<N> {
    Occupied { generation: u32, node: N },
    Vacant { generation: u32, next_free: Option<usize> },
}

/// Generational slot storage for linked nodes
#[derive(Debug, Clone)]
pub struct NodePool<N> {
    id: u64,
    slots: Vec<Slot<N>>,
    free_head: Option<usize>,
    live: usize,
}

impl<N> NodePool<N> {
    pub fn new() -> Self {
        NodePool {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Store a node, reusing a freed slot when one is available
    pub fn alloc(&mut self, node: N) -> NodeId {
        self.alloc_cyclic(|_| node)
    }

    /// Store a node built from its own handle (for self-referencing links)
    pub fn alloc_cyclic<F>(&mut self, make: F) -> NodeId
    where
        F: FnOnce(NodeId) -> N,
    {
        let id = match self.free_head {
            Some(index) => match &self.slots[index] {
                Slot::Vacant {
                    generation,
                    next_free,
                } => {
                    self.free_head = *next_free;
                    NodeId {
                        pool: self.id,
                        index,
                        generation: *generation,
                    }
                }
                Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            },
            None => {
                self.slots.push(Slot::Vacant {
                    generation: 0,
                    next_free: None,
                });
                NodeId {
                    pool: self.id,
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        self.slots[id.index] = Slot::Occupied {
            generation: id.generation,
            node: make(id),
        };
        self.live += 1;
        id
    }

    /// Remove a node and return it; its slot joins the free list
    pub fn free(&mut self, id: NodeId) -> Result<N, ContainerError> {
        self.check(id)?;
        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.index], vacant) {
            Slot::Occupied { node, .. } => {
                self.free_head = Some(id.index);
                self.live -= 1;
                Ok(node)
            }
            Slot::Vacant { .. } => unreachable!("checked slot was vacant"),
        }
    }

    pub fn get(&self, id: NodeId) -> Result<&N, ContainerError> {
        self.check_owner(id)?;
        match self.slots.get(id.index) {
            Some(Slot::Occupied { generation, node }) if *generation == id.generation => Ok(node),
            _ => Err(ContainerError::StaleNode { index: id.index }),
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut N, ContainerError> {
        self.check_owner(id)?;
        match self.slots.get_mut(id.index) {
            Some(Slot::Occupied { generation, node }) if *generation == id.generation => Ok(node),
            _ => Err(ContainerError::StaleNode { index: id.index }),
        }
    }

    /// Whether the handle still refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots ever allocated, live or free
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every node and forget all slots
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    fn check(&self, id: NodeId) -> Result<(), ContainerError> {
        self.get(id).map(|_| ())
    }

    fn check_owner(&self, id: NodeId) -> Result<(), ContainerError> {
        if id.pool == self.id {
            Ok(())
        } else {
            Err(ContainerError::ForeignNode { index: id.index })
        }
    }
}

impl<N> Default for NodePool<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freed_slot_is_reused() {
        let mut pool = NodePool::new();
        let a = pool.alloc("a");
        let _b = pool.alloc("b");
        assert_eq!(pool.free(a), Ok("a"));

        let c = pool.alloc("c");
        assert_eq!(c.index(), a.index());
        assert_eq!(pool.slot_count(), 2);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_stale_handle_rejected() {
        let mut pool = NodePool::new();
        let a = pool.alloc(1);
        pool.free(a).unwrap();
        let _reused = pool.alloc(2);

        assert_eq!(pool.get(a), Err(ContainerError::StaleNode { index: 0 }));
        assert!(pool.free(a).is_err());
    }

    #[test]
    fn test_handle_from_another_pool_rejected() {
        let mut first = NodePool::new();
        let mut second = NodePool::new();
        let a = first.alloc("first");
        let b = second.alloc("second");
        assert_eq!(a.index(), b.index());

        assert_eq!(second.get(a), Err(ContainerError::ForeignNode { index: 0 }));
        assert_eq!(second.free(a), Err(ContainerError::ForeignNode { index: 0 }));
        assert!(!second.contains(a));
        assert_eq!(second.get(b), Ok(&"second"));

        // a clone holds the same nodes, so the original's handles still apply
        let copy = first.clone();
        assert_eq!(copy.get(a), Ok(&"first"));
    }
}
