//! Error types for the containers in this crate.
//!
//! Positional containers ([`Deque`](crate::structures::Deque) and
//! [`LinkedList`](crate::structures::LinkedList)) report failures through
//! [`CollectionError`], which wraps either an [`IndexOutOfBoundsError`] or an
//! [`EmptyContainerError`]. The keyed container
//! ([`NonHashMap`](crate::structures::NonHashMap)) reports failures through
//! [`KeyError`], which carries the offending key.
//!
//! Every fallible operation validates its arguments before touching the
//! container, so an error always leaves the container unchanged.

use std::fmt;

/// Represents an access at a position outside the valid range of a container.
///
/// # Examples
///
/// ```rust
/// use linked_collections::error::IndexOutOfBoundsError;
///
/// let error = IndexOutOfBoundsError {
///     index: 7,
///     container_type: "Deque",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Index 7 in iterable of type Deque is out of bounds."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfBoundsError {
    /// The offending index.
    pub index: usize,
    /// The name of the container that rejected the index.
    pub container_type: &'static str,
}

impl fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Index {} in iterable of type {} is out of bounds.",
            self.index, self.container_type
        )
    }
}

impl std::error::Error for IndexOutOfBoundsError {}

/// Represents an element access on a container that holds no elements.
///
/// # Examples
///
/// ```rust
/// use linked_collections::error::EmptyContainerError;
///
/// let error = EmptyContainerError {
///     container_type: "LinkedList",
/// };
/// assert_eq!(format!("{error}"), "LinkedList is empty.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyContainerError {
    /// The name of the empty container.
    pub container_type: &'static str,
}

impl fmt::Display for EmptyContainerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} is empty.", self.container_type)
    }
}

impl std::error::Error for EmptyContainerError {}

/// Errors raised by positional containers.
///
/// # Examples
///
/// ```rust
/// use linked_collections::error::CollectionError;
/// use linked_collections::structures::Deque;
///
/// let deque: Deque<i32> = Deque::new();
/// match deque.head() {
///     Err(CollectionError::EmptyContainer(error)) => {
///         assert_eq!(error.container_type, "Deque");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// A position was at or beyond the valid range.
    IndexOutOfBounds(IndexOutOfBoundsError),
    /// An element was requested from an empty container.
    EmptyContainer(EmptyContainerError),
}

impl CollectionError {
    /// Creates an [`CollectionError::IndexOutOfBounds`] error.
    #[inline]
    #[must_use]
    pub const fn index_out_of_bounds(index: usize, container_type: &'static str) -> Self {
        Self::IndexOutOfBounds(IndexOutOfBoundsError {
            index,
            container_type,
        })
    }

    /// Creates an [`CollectionError::EmptyContainer`] error.
    #[inline]
    #[must_use]
    pub const fn empty_container(container_type: &'static str) -> Self {
        Self::EmptyContainer(EmptyContainerError { container_type })
    }

    /// Returns the name of the container that raised the error.
    #[must_use]
    pub const fn container_type(&self) -> &'static str {
        match self {
            Self::IndexOutOfBounds(error) => error.container_type,
            Self::EmptyContainer(error) => error.container_type,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds(error) => write!(formatter, "{error}"),
            Self::EmptyContainer(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexOutOfBounds(error) => Some(error),
            Self::EmptyContainer(error) => Some(error),
        }
    }
}

impl From<IndexOutOfBoundsError> for CollectionError {
    fn from(error: IndexOutOfBoundsError) -> Self {
        Self::IndexOutOfBounds(error)
    }
}

impl From<EmptyContainerError> for CollectionError {
    fn from(error: EmptyContainerError) -> Self {
        Self::EmptyContainer(error)
    }
}

/// The reason a key was rejected by a mapping type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyErrorKind {
    /// The key is already present and cannot be added again.
    Duplicate,
    /// The key is not present.
    Missing,
}

/// Represents a rejected key in a mapping type.
///
/// The error owns the offending key so that callers can recover it.
///
/// # Examples
///
/// ```rust
/// use linked_collections::error::{KeyError, KeyErrorKind};
///
/// let error = KeyError::duplicate(5, "NonHashMap");
/// assert_eq!(error.kind, KeyErrorKind::Duplicate);
/// assert_eq!(
///     format!("{error}"),
///     "Key 5 is a duplicate for mapping type NonHashMap"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyError<K> {
    /// The offending key.
    pub key: K,
    /// Why the key was rejected.
    pub kind: KeyErrorKind,
    /// The name of the mapping type that rejected the key.
    pub mapping_type: &'static str,
}

impl<K> KeyError<K> {
    /// Creates an error for a key that is already present.
    #[inline]
    #[must_use]
    pub const fn duplicate(key: K, mapping_type: &'static str) -> Self {
        Self {
            key,
            kind: KeyErrorKind::Duplicate,
            mapping_type,
        }
    }

    /// Creates an error for a key that is not present.
    #[inline]
    #[must_use]
    pub const fn missing(key: K, mapping_type: &'static str) -> Self {
        Self {
            key,
            kind: KeyErrorKind::Missing,
            mapping_type,
        }
    }

    /// Consumes the error, returning the offending key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for KeyError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            KeyErrorKind::Duplicate => write!(
                formatter,
                "Key {:?} is a duplicate for mapping type {}",
                self.key, self.mapping_type
            ),
            KeyErrorKind::Missing => write!(
                formatter,
                "Key {:?} is missing from mapping type {}",
                self.key, self.mapping_type
            ),
        }
    }
}

impl<K: fmt::Debug> std::error::Error for KeyError<K> {}
