//! Positional cursors over a [`Deque`].
//!
//! A [`Cursor`] points at one node of a deque (or at the end sentinel) and
//! moves one node at a time in its [`Direction`]. The access capability is
//! the type parameter: `Cursor<&Deque<T>>` reads, `Cursor<&mut Deque<T>>`
//! may also write the current element.
//!
//! A cursor borrows its deque for as long as it lives, so the deque cannot
//! be restructured underneath it:
//!
//! ```rust,compile_fail
//! use linked_collections::structures::Deque;
//!
//! let mut deque = Deque::from_slice(&[1, 2, 3]);
//! let cursor = deque.cursor_front();
//! deque.append(4);
//! assert_eq!(cursor.current(), Some(&1));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use linked_collections::structures::Deque;
//!
//! let deque = Deque::from_slice(&[1, 2, 3]);
//! let mut cursor = deque.cursor_back();
//! let mut seen = Vec::new();
//! while let Some(element) = cursor.get() {
//!     seen.push(*element);
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![3, 2, 1]);
//! assert!(cursor.is_end());
//! ```

use std::ops::Deref;

use super::deque::Deque;
use crate::arena::NodeIndex;

/// The way a [`Cursor`] travels along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From head to tail.
    Forward,
    /// From tail to head.
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// A cursor over the nodes of a [`Deque`].
///
/// `C` is either `&Deque<T>` or `&mut Deque<T>`. Shared cursors are `Copy`;
/// mutable cursors are unique.
///
/// Two cursors are equal when they are drawn from the same deque and point
/// at the same node. Every cursor that has run off the end compares equal to
/// every other cursor at the end of the same deque.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<C> {
    deque: C,
    current: Option<NodeIndex>,
    direction: Direction,
}

impl<C, T> Cursor<C>
where
    C: Deref<Target = Deque<T>>,
{
    pub(super) const fn new(deque: C, current: Option<NodeIndex>, direction: Direction) -> Self {
        Self {
            deque,
            current,
            direction,
        }
    }

    /// Moves to the next node in the cursor's direction and returns the
    /// cursor.
    ///
    /// Advancing a cursor that is already at the end leaves it there.
    pub fn advance(&mut self) -> &mut Self {
        if let Some(index) = self.current {
            self.current = self.deque.nodes[index].neighbour(self.direction);
        }
        self
    }

    /// Returns a reference to the current element, or `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.map(|index| &self.deque.nodes[index].element)
    }

    /// Returns `true` once the cursor has moved past the last node.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the direction the cursor travels in.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns a read-only cursor at the same position.
    #[must_use]
    pub fn as_shared(&self) -> Cursor<&Deque<T>> {
        Cursor::new(&*self.deque, self.current, self.direction)
    }
}

impl<'a, T> Cursor<&'a Deque<T>> {
    /// Returns the current element with the lifetime of the deque borrow.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        let deque = self.deque;
        self.current.map(|index| &deque.nodes[index].element)
    }

    /// Advances the cursor and returns a copy of its position before the
    /// move.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let deque = Deque::from_slice(&[1, 2]);
    /// let mut cursor = deque.cursor_front();
    /// let before = cursor.post_advance();
    /// assert_eq!(before.get(), Some(&1));
    /// assert_eq!(cursor.get(), Some(&2));
    /// ```
    pub fn post_advance(&mut self) -> Self {
        let snapshot = *self;
        self.advance();
        snapshot
    }
}

impl<'a, T> Cursor<&'a mut Deque<T>> {
    /// Returns a mutable reference to the current element, or `None` at the
    /// end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::Deque;
    ///
    /// let mut deque = Deque::from_slice(&[1, 2, 3]);
    /// let mut cursor = deque.cursor_front_mut();
    /// while let Some(element) = cursor.current_mut() {
    ///     *element += 10;
    ///     cursor.advance();
    /// }
    /// assert_eq!(deque.as_vec(), vec![11, 12, 13]);
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.current {
            Some(index) => Some(&mut self.deque.nodes[index].element),
            None => None,
        }
    }

    /// Consumes the cursor, returning the current element with the lifetime
    /// of the deque borrow.
    #[must_use]
    pub fn into_current(self) -> Option<&'a mut T> {
        match self.current {
            Some(index) => Some(&mut self.deque.nodes[index].element),
            None => None,
        }
    }
}

impl<C, D, T> PartialEq<Cursor<D>> for Cursor<C>
where
    C: Deref<Target = Deque<T>>,
    D: Deref<Target = Deque<T>>,
{
    fn eq(&self, other: &Cursor<D>) -> bool {
        std::ptr::eq(&*self.deque, &*other.deque) && self.current == other.current
    }
}

impl<C, T> Eq for Cursor<C> where C: Deref<Target = Deque<T>> {}
