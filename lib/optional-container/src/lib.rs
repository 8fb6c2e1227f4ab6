//! A container for a value that may be absent.
//!
//! [`Optional`] makes absence explicit in a signature: a function returning `Optional<T>`
//! either holds exactly one `T` (it is *present*) or holds nothing (it is *empty*). The state
//! is fixed when the container is built and never changes afterwards; every transformation
//! builds a new container.
//!
//! ```
//! use optional_container::Optional;
//!
//! let name = Optional::of("whatever")
//!     .map_nullable(|_| None::<&str>)
//!     .or_else("not found");
//! assert_eq!(name, "not found");
//! ```
mod error;
pub mod iter;
#[cfg(feature = "serde")]
mod serde_impls;

use std::fmt;

pub use error::OptionalError;
pub use iter::{IntoIter, Iter};

/// Result of the fallible operations on [`Optional`].
pub type Result<T, E = OptionalError> = std::result::Result<T, E>;

/// A value of type `T` that may be absent.
///
/// Empty orders before present, and two present containers compare by their values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    Empty,
    Present(T),
}

use Optional::{Empty, Present};

impl<T> Optional<T> {
    /// Builds a present container.
    pub const fn of(value: T) -> Self {
        Present(value)
    }

    /// Builds a present container from a value that must not be absent.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] if `value` is `None`.
    #[track_caller]
    pub fn try_of(value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => Ok(Present(value)),
            None => Err(OptionalError::invalid_argument("value")),
        }
    }

    /// Builds a container that is present iff `value` is `Some`.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Empty,
        }
    }

    /// Builds an empty container.
    pub const fn empty() -> Self {
        Empty
    }

    /// Returns `true` if the container holds no value.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// Returns `true` if the container holds a value.
    pub const fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoSuchElement`] if the container is empty.
    #[track_caller]
    pub fn get(&self) -> Result<&T> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(OptionalError::no_such_element()),
        }
    }

    /// Moves the held value out of the container.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoSuchElement`] if the container is empty.
    #[track_caller]
    pub fn into_value(self) -> Result<T> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(OptionalError::no_such_element()),
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Empty => Empty,
        }
    }

    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Present(value) => Some(value),
            Empty => None,
        }
    }

    /// Calls `f` with the held value, if any.
    pub fn if_present(&self, f: impl FnOnce(&T)) {
        if let Present(value) = self {
            f(value);
        }
    }

    /// Calls exactly one of `present` or `empty` depending on the state of the container and
    /// returns its result.
    pub fn if_present_or_else<R>(
        &self,
        present: impl FnOnce(&T) -> R,
        empty: impl FnOnce() -> R,
    ) -> R {
        match self {
            Present(value) => present(value),
            Empty => empty(),
        }
    }

    /// Keeps the value only if `predicate` holds for it. An empty container is returned as is and
    /// `predicate` is not called.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Present(value) => {
                if predicate(&value) {
                    Present(value)
                } else {
                    Empty
                }
            }
            Empty => Empty,
        }
    }

    /// Applies `mapper` to the held value. `mapper` is not called on an empty container.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Present(value) => Present(mapper(value)),
            Empty => Empty,
        }
    }

    /// Like [`Optional::map`], but a `None` returned by `mapper` yields an empty container.
    pub fn map_nullable<U>(self, mapper: impl FnOnce(T) -> Option<U>) -> Optional<U> {
        match self {
            Present(value) => Optional::of_nullable(mapper(value)),
            Empty => Empty,
        }
    }

    /// Returns the container produced by `mapper`, unchanged.
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Present(value) => mapper(value),
            Empty => Empty,
        }
    }

    /// Like [`Optional::flat_map`] for mappers that may fail to produce a container at all.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] if the container is present and `mapper`
    /// returns `None`. An empty container short-circuits before `mapper` is called.
    #[track_caller]
    pub fn try_flat_map<U>(
        self,
        mapper: impl FnOnce(T) -> Option<Optional<U>>,
    ) -> Result<Optional<U>> {
        match self {
            Present(value) => match mapper(value) {
                Some(mapped) => Ok(mapped),
                None => Err(OptionalError::invalid_argument("mapper")),
            },
            Empty => Ok(Empty),
        }
    }

    /// Returns the held value, or `other` if empty.
    pub fn or_else(self, other: T) -> T {
        match self {
            Present(value) => value,
            Empty => other,
        }
    }

    /// Returns the held value, or the result of `supplier` if empty. `supplier` is only called on
    /// the empty path.
    pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Present(value) => value,
            Empty => supplier(),
        }
    }

    /// Returns `self` if present, otherwise the container produced by `supplier`.
    pub fn or(self, supplier: impl FnOnce() -> Optional<T>) -> Self {
        match self {
            Present(_) => self,
            Empty => supplier(),
        }
    }

    /// Like [`Optional::or`] for suppliers that may fail to produce a container at all.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] if the container is empty and `supplier`
    /// returns `None`.
    #[track_caller]
    pub fn try_or(self, supplier: impl FnOnce() -> Option<Optional<T>>) -> Result<Self> {
        match self {
            Present(_) => Ok(self),
            Empty => match supplier() {
                Some(other) => Ok(other),
                None => Err(OptionalError::invalid_argument("supplier")),
            },
        }
    }

    /// Returns the held value, or the error built by `err` if empty.
    ///
    /// # Errors
    ///
    /// Returns the result of `err` when the container is empty. `err` is never called otherwise.
    pub fn or_else_err<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Present(value) => Ok(value),
            Empty => Err(err()),
        }
    }

    /// Starts a new traversal yielding the held value once, or nothing if empty.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_option())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Present(value) => Some(value),
            Empty => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Optional[{value}]"),
            Empty => write!(f, "Optional.empty"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into())
    }
}
