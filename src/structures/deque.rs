//! Doubly-linked double-ended queue.
//!
//! This module provides [`Deque`], a mutable doubly-linked list whose nodes
//! live in an arena and are linked by index.
//!
//! # Overview
//!
//! - O(1) `append` / `append_left`
//! - O(1) `head` / `tail` access and `pop_head` / `pop_tail`
//! - O(n) positional access, walking from whichever end is closer
//! - O(n) `reverse` in place, O(n log n) stable `sort`
//!
//! Every node is owned by exactly one deque. Cloning copies each element into
//! a fresh chain; moving a deque (or taking it with [`std::mem::take`])
//! transfers the whole chain and leaves an empty deque behind.
//!
//! # Examples
//!
//! ```rust
//! use linked_collections::structures::Deque;
//!
//! let mut deque = Deque::from_slice(&[1, 2, 3, 4, 5]);
//! deque.insert(3, 7).unwrap();
//! assert_eq!(deque.len(), 6);
//! assert_eq!(deque[3], 7);
//!
//! assert_eq!(deque.pop(0), Ok(1));
//! assert_eq!(format!("{deque}"), "{2, 3, 7, 4, 5}");
//!
//! let doubled = deque.clone() + deque;
//! assert_eq!(doubled.len(), 10);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul};

use super::cursor::{Cursor, Direction};
use crate::algorithms::merge_sort_by;
use crate::arena::{Arena, NodeIndex};
use crate::error::CollectionError;

const CONTAINER_TYPE: &str = "Deque";

/// A single cell of the chain.
pub(super) struct Node<T> {
    pub(super) element: T,
    pub(super) previous: Option<NodeIndex>,
    pub(super) next: Option<NodeIndex>,
}

impl<T> Node<T> {
    /// Returns the neighbour in the given direction of travel.
    #[inline]
    pub(super) const fn neighbour(&self, direction: Direction) -> Option<NodeIndex> {
        match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.previous,
        }
    }
}

/// A doubly-linked double-ended queue.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `append`         | O(1)       |
/// | `append_left`    | O(1)       |
/// | `head` / `tail`  | O(1)       |
/// | `len`            | O(1)       |
/// | `get`            | O(min(i, n - i)) |
/// | `insert`         | O(min(i, n - i)) |
/// | `pop`            | O(min(i, n - i)) |
/// | `reverse`        | O(n)       |
/// | `sort`           | O(n log n) |
/// | `+`              | O(m)       |
///
/// # Examples
///
/// ```rust
/// use linked_collections::structures::Deque;
///
/// let mut deque = Deque::new();
/// deque.append(2);
/// deque.append_left(1);
/// assert_eq!(deque.head(), Ok(&1));
/// assert_eq!(deque.tail(), Ok(&2));
/// ```
pub struct Deque<T> {
    pub(super) nodes: Arena<Node<T>>,
    pub(super) head: Option<NodeIndex>,
    pub(super) tail: Option<NodeIndex>,
}

static_assertions::assert_impl_all!(Deque<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Deque<std::rc::Rc<i32>>: Send, Sync);

impl<T> Deque<T> {
    /// Creates a new empty deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty deque with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[1, 2, 3]);
    /// assert_eq!(deque.head(), Ok(&1));
    ///
    /// let empty: Deque<i32> = Deque::new();
    /// assert!(empty.head().is_err());
    /// ```
    pub fn head(&self) -> Result<&T, CollectionError> {
        self.head
            .map(|index| &self.nodes[index].element)
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn head_mut(&mut self) -> Result<&mut T, CollectionError> {
        match self.head {
            Some(index) => Ok(&mut self.nodes[index].element),
            None => Err(CollectionError::empty_container(CONTAINER_TYPE)),
        }
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn tail(&self) -> Result<&T, CollectionError> {
        self.tail
            .map(|index| &self.nodes[index].element)
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn tail_mut(&mut self) -> Result<&mut T, CollectionError> {
        match self.tail {
            Some(index) => Ok(&mut self.nodes[index].element),
            None => Err(CollectionError::empty_container(CONTAINER_TYPE)),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The walk starts from the tail when `index` lies in the back half and
    /// from the head otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[10, 20, 30]);
    /// assert_eq!(deque.get(2), Ok(&30));
    /// assert!(deque.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let node = self.locate(index)?;
        Ok(&self.nodes[node].element)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let node = self.locate(index)?;
        Ok(&mut self.nodes[node].element)
    }

    /// Adds an element at the back.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn append(&mut self, element: T) {
        let index = self.nodes.allocate(Node {
            element,
            previous: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Adds an element at the front.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn append_left(&mut self, element: T) {
        let index = self.nodes.allocate(Node {
            element,
            previous: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].previous = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// `index == len()` appends at the back and `index == 0` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index > len()`; the
    /// deque is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let mut deque = Deque::from_slice(&[1, 2, 3, 4, 5]);
    /// deque.insert(3, 7).unwrap();
    /// assert_eq!(deque.as_vec(), vec![1, 2, 3, 7, 4, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        let length = self.len();
        if index > length {
            return Err(CollectionError::index_out_of_bounds(index, CONTAINER_TYPE));
        }
        if index == length {
            self.append(element);
        } else if index == 0 {
            self.append_left(element);
        } else {
            let successor = self.locate(index)?;
            let predecessor = self.nodes[successor].previous;
            let inserted = self.nodes.allocate(Node {
                element,
                previous: predecessor,
                next: Some(successor),
            });
            if let Some(predecessor) = predecessor {
                self.nodes[predecessor].next = Some(inserted);
            }
            self.nodes[successor].previous = Some(inserted);
        }
        Ok(())
    }

    /// Removes the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] (index 0) if the deque
    /// is empty.
    pub fn remove_head(&mut self) -> Result<(), CollectionError> {
        match self.head {
            Some(head) => {
                drop(self.unlink(head));
                Ok(())
            }
            None => Err(CollectionError::index_out_of_bounds(0, CONTAINER_TYPE)),
        }
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        self.pop(index).map(drop)
    }

    /// Removes the front element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let mut deque = Deque::from_slice(&[1, 2]);
    /// assert_eq!(deque.pop_head(), Ok(1));
    /// assert_eq!(deque.pop_head(), Ok(2));
    /// assert!(deque.pop_head().is_err());
    /// ```
    pub fn pop_head(&mut self) -> Result<T, CollectionError> {
        self.take_head()
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Removes the back element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn pop_tail(&mut self) -> Result<T, CollectionError> {
        self.take_tail()
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn pop(&mut self, index: usize) -> Result<T, CollectionError> {
        let node = self.locate(index)?;
        Ok(self.unlink(node))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Exchanges the contents of two deques without touching any element.
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Reverses the order of the elements in place.
    ///
    /// Swaps the links of every node and then swaps the head and tail; no
    /// element is moved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let mut deque = Deque::from_slice(&[1, 2, 3]);
    /// deque.reverse();
    /// assert_eq!(deque.as_vec(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        tracing::trace!(length = self.len(), "reversing deque");
        let mut current = self.head;
        while let Some(index) = current {
            let node = &mut self.nodes[index];
            std::mem::swap(&mut node.previous, &mut node.next);
            current = node.previous;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Sorts the deque in place with a comparator.
    ///
    /// The sort is stable: elements that compare equal keep their relative
    /// order. Only node indices are sorted; the chain is relinked once the
    /// order is known, so a panicking comparator leaves the deque unchanged.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        let mut order = self.chain();
        let nodes = &self.nodes;
        merge_sort_by(&mut order, |left, right| {
            compare(&nodes[*left].element, &nodes[*right].element)
        });
        self.relink(&order);
    }

    /// Sorts the deque in place by the key extracted from each element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let mut deque = Deque::from_slice(&[(1, "a"), (1, "b"), (0, "c")]);
    /// deque.sort_by_key(|pair| pair.0);
    /// assert_eq!(deque.as_vec(), vec![(0, "c"), (1, "a"), (1, "b")]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|left, right| key(left).cmp(&key(right)));
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// The iterator is double-ended; `iter().rev()` walks back to front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[1, 2, 3]);
    /// let forward: Vec<&i32> = deque.iter().collect();
    /// let backward: Vec<&i32> = deque.iter().rev().collect();
    /// assert_eq!(forward, vec![&1, &2, &3]);
    /// assert_eq!(backward, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over mutable references to the elements, front to
    /// back.
    ///
    /// Building the iterator walks the chain once to fix the visiting order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let order = self.chain();
        let mut by_slot: Vec<Option<&mut Node<T>>> = self.nodes.slots_mut().collect();
        let elements: Vec<&mut T> = order
            .into_iter()
            .filter_map(|index| by_slot[index.slot()].take())
            .map(|node| &mut node.element)
            .collect();
        IterMut {
            inner: elements.into_iter(),
        }
    }

    /// Returns a read-only cursor positioned on the front element, travelling
    /// towards the back.
    #[inline]
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<&Self> {
        Cursor::new(self, self.head, Direction::Forward)
    }

    /// Returns a read-only cursor positioned on the back element, travelling
    /// towards the front.
    #[inline]
    #[must_use]
    pub fn cursor_back(&self) -> Cursor<&Self> {
        Cursor::new(self, self.tail, Direction::Backward)
    }

    /// Returns a read-only cursor already at the end sentinel for the given
    /// direction.
    #[inline]
    #[must_use]
    pub fn cursor_end(&self, direction: Direction) -> Cursor<&Self> {
        Cursor::new(self, None, direction)
    }

    /// Returns a mutable cursor positioned on the front element, travelling
    /// towards the back.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> Cursor<&mut Self> {
        let head = self.head;
        Cursor::new(self, head, Direction::Forward)
    }

    /// Returns a mutable cursor positioned on the back element, travelling
    /// towards the front.
    #[inline]
    pub fn cursor_back_mut(&mut self) -> Cursor<&mut Self> {
        let tail = self.tail;
        Cursor::new(self, tail, Direction::Backward)
    }

    /// Returns the node holding position `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> Result<NodeIndex, CollectionError> {
        let length = self.len();
        if index >= length {
            return Err(CollectionError::index_out_of_bounds(index, CONTAINER_TYPE));
        }
        let found = if index > length / 2 {
            self.walk(self.tail, Direction::Backward, length - index - 1)
        } else {
            self.walk(self.head, Direction::Forward, index)
        };
        found.ok_or(CollectionError::index_out_of_bounds(index, CONTAINER_TYPE))
    }

    fn walk(
        &self,
        start: Option<NodeIndex>,
        direction: Direction,
        steps: usize,
    ) -> Option<NodeIndex> {
        let mut current = start;
        for _ in 0..steps {
            current = current.and_then(|index| self.nodes[index].neighbour(direction));
        }
        current
    }

    /// Node indices in link order, front to back.
    fn chain(&self) -> Vec<NodeIndex> {
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.head;
        while let Some(index) = current {
            order.push(index);
            current = self.nodes[index].next;
        }
        order
    }

    /// Rebuilds the links so the chain visits `order` front to back.
    fn relink(&mut self, order: &[NodeIndex]) {
        let mut previous = None;
        for &index in order {
            self.nodes[index].previous = previous;
            self.nodes[index].next = None;
            if let Some(previous) = previous {
                self.nodes[previous].next = Some(index);
            }
            previous = Some(index);
        }
        self.head = order.first().copied();
        self.tail = previous;
    }

    /// Detaches `index` from its neighbours and releases it.
    fn unlink(&mut self, index: NodeIndex) -> T {
        let node = self.nodes.release(index);
        match node.previous {
            Some(previous) => self.nodes[previous].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].previous = node.previous,
            None => self.tail = node.previous,
        }
        node.element
    }

    fn take_head(&mut self) -> Option<T> {
        self.head.map(|head| self.unlink(head))
    }

    fn take_tail(&mut self) -> Option<T> {
        self.tail.map(|tail| self.unlink(tail))
    }

    #[cfg(test)]
    fn naive_get(&self, index: usize) -> Option<&T> {
        self.walk(self.head, Direction::Forward, index)
            .map(|node| &self.nodes[node].element)
    }
}

impl<T: Clone> Deque<T> {
    /// Creates a deque holding a copy of every element of `slice`, in order.
    ///
    /// An empty slice produces an empty deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    ///
    /// let empty: Deque<i32> = Deque::from_slice(&[]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        tracing::trace!(length = slice.len(), "building deque from slice");
        let mut deque = Self::with_capacity(slice.len());
        for element in slice {
            deque.append(element.clone());
        }
        deque
    }

    /// Returns a new deque with the elements in reverse order.
    ///
    /// The original deque is unchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Returns a snapshot of the elements as a `Vec`, front to back.
    ///
    /// An empty deque produces an empty `Vec`; see [`Deque::to_vec`] for the
    /// variant that rejects empty deques.
    #[must_use]
    pub fn as_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a snapshot of the elements as a `Vec`, front to back.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[1, 2]);
    /// assert_eq!(deque.to_vec(), Ok(vec![1, 2]));
    ///
    /// let empty: Deque<i32> = Deque::new();
    /// assert!(empty.to_vec().is_err());
    /// assert_eq!(empty.as_vec(), Vec::<i32>::new());
    /// ```
    pub fn to_vec(&self) -> Result<Vec<T>, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::empty_container(CONTAINER_TYPE));
        }
        Ok(self.as_vec())
    }
}

impl<T: Ord> Deque<T> {
    /// Sorts the deque in place in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n log n) time, O(n) auxiliary space
    pub fn sort(&mut self) {
        self.sort_by(Ord::cmp);
    }
}

impl<T: Ord + Clone> Deque<T> {
    /// Returns a sorted copy of the deque; the original is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[3, 1, 2]);
    /// assert_eq!(deque.sorted().as_vec(), vec![1, 2, 3]);
    /// assert_eq!(deque.as_vec(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }
}

impl<T: PartialEq> Deque<T> {
    /// Returns `true` if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }

    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to the elements of a [`Deque`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over mutable references to the elements of a [`Deque`].
pub struct IterMut<'a, T> {
    inner: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`Deque`].
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.deque.take_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.take_tail()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies every element into a fresh, compact chain.
impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut deque = Self::with_capacity(elements.len());
        deque.extend(elements);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(elements: [T; N]) -> Self {
        let mut deque = Self::with_capacity(N);
        deque.extend(elements);
        deque
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Two deques are equal when they have the same length and equal elements
/// in the same order.
impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the deque as `{e0, e1, ..., en-1}`; an empty deque renders as `{}`.
impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

/// Concatenates two deques, consuming both.
///
/// The elements of `rhs` are moved behind those of `self`; nothing is
/// cloned.
impl<T> Add for Deque<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T> AddAssign for Deque<T> {
    fn add_assign(&mut self, rhs: Self) {
        tracing::trace!(lhs = self.len(), rhs = rhs.len(), "concatenating deques");
        if self.is_empty() {
            *self = rhs;
        } else {
            self.extend(rhs);
        }
    }
}

/// Repeats the deque `count` times.
///
/// Both `count == 0` and `count == 1` return the deque unchanged.
///
/// # Examples
///
/// ```rust
/// use linked_collections::structures::Deque;
///
/// let deque = Deque::from_slice(&[1, 2]);
/// assert_eq!((deque.clone() * 3).as_vec(), vec![1, 2, 1, 2, 1, 2]);
/// assert_eq!(deque.clone() * 0, deque);
/// ```
impl<T: Clone> Mul<usize> for Deque<T> {
    type Output = Self;

    fn mul(self, count: usize) -> Self {
        if count <= 1 {
            return self;
        }
        tracing::trace!(length = self.len(), count, "repeating deque");
        let original = self.clone();
        let mut repeated = self;
        for _ in 1..count {
            repeated.extend(original.iter().cloned());
        }
        repeated
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Deque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct DequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for DequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Deque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut deque = Deque::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            deque.append(element);
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Deque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(DequeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
