//! Slot storage for linked nodes.
//!
//! Linked containers in this crate keep their nodes in an [`Arena`] and link
//! them by [`NodeIndex`] instead of by pointer. Released slots are threaded
//! onto a free list and reused by later allocations, so a long-lived
//! container that alternates insertions and removals does not grow without
//! bound.

use std::ops::{Index, IndexMut};

/// Stable address of a node inside an [`Arena`].
///
/// An index stays valid until the node it names is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
    /// Returns the slot position this index refers to.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0
    }
}

enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<NodeIndex> },
}

/// A growable pool of nodes addressed by [`NodeIndex`].
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl<N> Arena<N> {
    /// Creates an empty arena without allocating.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    /// Number of slots backing the arena, occupied or vacant.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `node` and returns its index, reusing a vacant slot when one
    /// is available.
    pub(crate) fn allocate(&mut self, node: N) -> NodeIndex {
        self.occupied += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index.slot()];
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                }
                *slot = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node at `index` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `index` names a vacant slot.
    pub(crate) fn release(&mut self, index: NodeIndex) -> N {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index.slot()], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                self.slots[index.slot()] = Slot::Vacant { next_free };
                panic!("released a vacant arena slot {}", index.slot());
            }
        }
    }

    /// Returns the node at `index`, or `None` if the slot is vacant.
    #[inline]
    pub(crate) fn get(&self, index: NodeIndex) -> Option<&N> {
        match self.slots.get(index.slot()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Arena::get`].
    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut N> {
        match self.slots.get_mut(index.slot()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Drops every node and forgets all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }

    /// Yields a mutable reference per slot, in slot order, with `None` for
    /// vacant slots.
    ///
    /// Position `i` of the sequence corresponds to `NodeIndex` slot `i`, which
    /// lets callers hand out disjoint `&mut` borrows in link order.
    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = Option<&mut N>> {
        self.slots.iter_mut().map(|slot| match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        })
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeIndex> for Arena<N> {
    type Output = N;

    fn index(&self, index: NodeIndex) -> &N {
        match self.get(index) {
            Some(node) => node,
            None => panic!("arena slot {} is vacant", index.slot()),
        }
    }
}

impl<N> IndexMut<NodeIndex> for Arena<N> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut N {
        match self.get_mut(index) {
            Some(node) => node,
            None => panic!("arena slot {} is vacant", index.slot()),
        }
    }
}
