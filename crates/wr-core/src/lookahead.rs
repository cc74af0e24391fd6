//! Single-pass iterator adapter that tells each element whether more follow.

use std::iter::{FusedIterator, Peekable};

/// Iterator returned by [`lookahead`].
pub struct Lookahead<I: Iterator> {
    inner: Peekable<I>,
}

/// Pairs every element with `true` if another element follows it, and the
/// final element with `false`.
///
/// Only one element is buffered, so this works over any streamed source.
/// An empty input yields nothing.
pub fn lookahead<I: IntoIterator>(iterable: I) -> Lookahead<I::IntoIter> {
    Lookahead {
        inner: iterable.into_iter().peekable(),
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let has_more = self.inner.peek().is_some();
        Some((item, has_more))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Lookahead<I> {}

impl<I: FusedIterator> FusedIterator for Lookahead<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_element_has_no_more() {
        let flags: Vec<_> = lookahead(["a", "b", "c"]).collect();
        assert_eq!(flags, vec![("a", true), ("b", true), ("c", false)]);
    }

    #[test]
    fn test_single_element() {
        let flags: Vec<_> = lookahead([42]).collect();
        assert_eq!(flags, vec![(42, false)]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(lookahead(Vec::<u8>::new()).count(), 0);
    }

    #[test]
    fn test_works_on_streamed_source() {
        // A source that can only be walked forward once.
        let source = (1..=4).filter(|n| n % 2 == 0);
        let flags: Vec<_> = lookahead(source).collect();
        assert_eq!(flags, vec![(2, true), (4, false)]);
    }

    #[test]
    fn test_exact_size() {
        let iter = lookahead(vec![1, 2, 3]);
        assert_eq!(iter.len(), 3);
    }
}
