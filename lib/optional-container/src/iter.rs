use std::iter::FusedIterator;

use derive_where::derive_where;

/// A borrowing traversal over the value of an [`Optional`], yielding it at most once.
///
/// Every call to [`Optional::iter`] starts a fresh traversal, so a container can be iterated any
/// number of times.
///
/// [`Optional`]: crate::Optional
/// [`Optional::iter`]: crate::Optional::iter
#[derive_where(Clone)]
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning traversal that moves the value out of an [`Optional`](crate::Optional).
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::Optional;

    struct NotClone(u8);

    #[test]
    fn borrowed_iter_clones_without_clone_bound() {
        let opt = Optional::of(NotClone(7));
        let mut it = opt.iter();
        let mut copy = it.clone();
        assert_eq!(it.next().map(|v| v.0), Some(7));
        assert!(it.next().is_none());
        assert_eq!(copy.next().map(|v| v.0), Some(7));
    }

    #[test]
    fn debug_format() {
        let opt = Optional::of(3);
        assert_eq!(format!("{:?}", opt.iter()), "Iter { inner: Some(3) }");
        assert_eq!(format!("{:?}", Optional::<u8>::empty().iter()), "Iter { inner: None }");
    }

    #[test]
    fn exact_size() {
        assert_eq!(Optional::of(1).iter().len(), 1);
        assert_eq!(Optional::<i32>::empty().iter().len(), 0);
        assert_eq!(Optional::of(1).into_iter().len(), 1);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = Optional::of("x").into_iter();
        assert_eq!(it.next_back(), Some("x"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
