//! Iterator adapter draining a [`NumberSource`].

use std::iter::FusedIterator;

use crate::core::NumberSource;
use crate::types::Number;

/// Iterator yielding draws from a borrowed source until it is exhausted.
///
/// Dropping the iterator early leaves the undrawn numbers in the source.
#[derive(Debug)]
pub struct Draws<'a, S: ?Sized> {
    source: &'a mut S,
}

impl<'a, S: NumberSource + ?Sized> Draws<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }
}

impl<S: NumberSource + ?Sized> Iterator for Draws<'_, S> {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        if self.source.is_exhausted() {
            return None;
        }
        self.source.sample().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.source.remaining_count();
        (n, Some(n))
    }
}

impl<S: NumberSource + ?Sized> ExactSizeIterator for Draws<'_, S> {}

impl<S: NumberSource + ?Sized> FusedIterator for Draws<'_, S> {}

#[cfg(test)]
mod tests {
    use crate::samplers::UniqueNumberSampler;

    #[test]
    fn drains_everything_and_reports_len() {
        let mut g = UniqueNumberSampler::from_range_seeded(1, 8, 17).unwrap();
        let mut draws = g.draws();
        assert_eq!(draws.len(), 8);
        draws.next();
        assert_eq!(draws.len(), 7);

        let mut rest: Vec<i32> = draws.collect();
        assert_eq!(rest.len(), 7);
        rest.sort_unstable();
        rest.dedup();
        assert_eq!(rest.len(), 7);
        assert!(g.is_exhausted());
    }

    #[test]
    fn partial_take_leaves_remainder() {
        let mut g = UniqueNumberSampler::seeded([5, 5, 5, 5], 1);
        let taken: Vec<i32> = g.draws().take(3).collect();
        assert_eq!(taken, vec![5, 5, 5]);
        assert_eq!(g.remaining_numbers(), vec![5]);
    }

    #[test]
    fn empty_source_yields_nothing() {
        let mut g = UniqueNumberSampler::seeded(Vec::new(), 1);
        assert_eq!(g.draws().next(), None);
    }
}
