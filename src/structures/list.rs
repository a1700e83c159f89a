//! Singly-linked list.
//!
//! [`LinkedList`] keeps forward links only. It tracks its tail so that
//! appending at the back is O(1), but positional access and removal walk
//! from the head.
//!
//! # Examples
//!
//! ```rust
//! use linked_collections::structures::LinkedList;
//!
//! let mut list = LinkedList::from_slice(&[2, 3]);
//! list.append_left(1);
//! list.append(4);
//! assert_eq!(format!("{list}"), "{1, 2, 3, 4}");
//! assert_eq!(list.pop(2), Ok(3));
//! assert_eq!(list.tail(), Ok(&4));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::arena::{Arena, NodeIndex};
use crate::error::CollectionError;

const CONTAINER_TYPE: &str = "LinkedList";

struct Node<T> {
    element: T,
    next: Option<NodeIndex>,
}

/// A singly-linked list with O(1) access to both ends.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `append`        | O(1)       |
/// | `append_left`   | O(1)       |
/// | `head` / `tail` | O(1)       |
/// | `pop_head`      | O(1)       |
/// | `get`           | O(i)       |
/// | `pop`           | O(i)       |
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn head(&self) -> Result<&T, CollectionError> {
        self.head
            .map(|index| &self.nodes[index].element)
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn head_mut(&mut self) -> Result<&mut T, CollectionError> {
        match self.head {
            Some(index) => Ok(&mut self.nodes[index].element),
            None => Err(CollectionError::empty_container(CONTAINER_TYPE)),
        }
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn tail(&self) -> Result<&T, CollectionError> {
        self.tail
            .map(|index| &self.nodes[index].element)
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn tail_mut(&mut self) -> Result<&mut T, CollectionError> {
        match self.tail {
            Some(index) => Ok(&mut self.nodes[index].element),
            None => Err(CollectionError::empty_container(CONTAINER_TYPE)),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
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
    pub fn append(&mut self, element: T) {
        let index = self.nodes.allocate(Node {
            element,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Adds an element at the front.
    pub fn append_left(&mut self, element: T) {
        let index = self.nodes.allocate(Node {
            element,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
    }

    /// Removes the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] (index 0) if the list is
    /// empty.
    pub fn remove_head(&mut self) -> Result<(), CollectionError> {
        self.take_head()
            .map(drop)
            .ok_or(CollectionError::index_out_of_bounds(0, CONTAINER_TYPE))
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        self.pop(index).map(drop)
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn pop_head(&mut self) -> Result<T, CollectionError> {
        self.take_head()
            .ok_or(CollectionError::empty_container(CONTAINER_TYPE))
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::LinkedList;
    ///
    /// let mut list = LinkedList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.pop(2), Ok(3));
    /// assert_eq!(list.tail(), Ok(&2));
    /// assert!(list.pop(2).is_err());
    /// ```
    pub fn pop(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.len() {
            return Err(CollectionError::index_out_of_bounds(index, CONTAINER_TYPE));
        }
        if index == 0 {
            return self.pop_head();
        }
        let predecessor = self.locate(index - 1)?;
        let target = self.nodes[predecessor]
            .next
            .ok_or(CollectionError::index_out_of_bounds(index, CONTAINER_TYPE))?;
        let removed = self.nodes.release(target);
        self.nodes[predecessor].next = removed.next;
        if removed.next.is_none() {
            self.tail = Some(predecessor);
        }
        Ok(removed.element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len(),
        }
    }

    fn locate(&self, index: usize) -> Result<NodeIndex, CollectionError> {
        let out_of_bounds = CollectionError::index_out_of_bounds(index, CONTAINER_TYPE);
        if index >= self.len() {
            return Err(out_of_bounds);
        }
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|node| self.nodes[node].next);
        }
        current.ok_or(out_of_bounds)
    }

    fn take_head(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.element)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a list holding a copy of every element of `slice`, in order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        tracing::trace!(length = slice.len(), "building list from slice");
        slice.iter().cloned().collect()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns `true` if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over references to the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.take_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
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
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}
