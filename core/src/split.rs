//! Splitting sequences into balanced groups.
//!
//! Two policies are provided:
//!
//! - [`zip_split`] deals elements out round-robin, so group `i` holds every
//!   `chunks`-th element starting at `i`.
//! - [`group`] and [`group_with_fill`] cut contiguous runs of
//!   `ceil(len / chunks)` elements and pad the last run to full width.
//!
//! Both reject a chunk count of zero.
//!
//! ```rust
//! use ittools_core::split::{group, zip_split};
//!
//! let lengths: Vec<usize> = zip_split(&["hi"; 10], 3).unwrap().map(|g| g.len()).collect();
//! assert_eq!(lengths, [4, 3, 3]);
//!
//! let runs: Vec<Vec<Option<i32>>> = group(0..10, 3).unwrap().collect();
//! assert_eq!(runs[2], [Some(8), Some(9), None, None]);
//! ```

use std::iter::FusedIterator;

use ittools_common::{CommonError, Result};
use tracing::debug;

fn validate_chunks(chunks: usize) -> Result<()> {
    if chunks == 0 {
        return Err(CommonError::invalid_argument(
            "chunk count must be positive",
        ));
    }
    Ok(())
}

/// Iterator over the interleaved groups of a slice.
///
/// Created by [`zip_split`].
#[derive(Debug, Clone)]
pub struct ZipSplit<'a, T> {
    sequence: &'a [T],
    chunks: usize,
    next: usize,
}

/// Split `sequence` into `chunks` groups in round-robin order.
///
/// When the length is not a multiple of `chunks`, the first
/// `len % chunks` groups hold one extra element. An empty sequence yields
/// `chunks` empty groups.
pub fn zip_split<T: Clone>(sequence: &[T], chunks: usize) -> Result<ZipSplit<'_, T>> {
    validate_chunks(chunks)?;
    debug!(len = sequence.len(), chunks, "interleaved split");
    Ok(ZipSplit {
        sequence,
        chunks,
        next: 0,
    })
}

impl<T: Clone> Iterator for ZipSplit<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.chunks {
            return None;
        }
        let offset = self.next;
        self.next += 1;
        Some(
            self.sequence
                .iter()
                .skip(offset)
                .step_by(self.chunks)
                .cloned()
                .collect(),
        )
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chunks - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ZipSplit<'_, T> {}

impl<T: Clone> FusedIterator for ZipSplit<'_, T> {}

/// Iterator over the padded contiguous runs of a sequence.
///
/// Created by [`group`] and [`group_with_fill`].
#[derive(Debug, Clone)]
pub struct Group<I: Iterator> {
    inner: I,
    width: usize,
    fill: I::Item,
}

/// Split `iterable` into contiguous runs of `ceil(len / chunks)` elements,
/// padding the last run with `None`.
pub fn group<I>(iterable: I, chunks: usize) -> Result<Group<WrapSome<I::IntoIter>>>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Clone,
{
    group_with_fill(
        WrapSome {
            inner: iterable.into_iter(),
        },
        chunks,
        None,
    )
}

/// Split `iterable` into contiguous runs of `ceil(len / chunks)` elements,
/// padding the last run with copies of `fill`.
///
/// Every run has the same width. The number of runs is `ceil(len / width)`,
/// which may be less than `chunks`; an empty input yields no runs.
pub fn group_with_fill<I>(iterable: I, chunks: usize, fill: I::Item) -> Result<Group<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Clone,
{
    validate_chunks(chunks)?;
    let inner = iterable.into_iter();
    let width = inner.len().div_ceil(chunks);
    debug!(len = inner.len(), chunks, width, "contiguous split");
    Ok(Group { inner, width, fill })
}

impl<I> Group<I>
where
    I: Iterator,
{
    /// Width shared by every run.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<I> Iterator for Group<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 {
            return None;
        }
        let mut run: Vec<I::Item> = self.inner.by_ref().take(self.width).collect();
        if run.is_empty() {
            return None;
        }
        run.resize(self.width, self.fill.clone());
        Some(run)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.width == 0 {
            0
        } else {
            self.inner.len().div_ceil(self.width)
        };
        (remaining, Some(remaining))
    }
}

impl<I> ExactSizeIterator for Group<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> FusedIterator for Group<I>
where
    I: ExactSizeIterator + FusedIterator,
    I::Item: Clone,
{
}

/// Adapter yielding `Some(item)` for every item of the inner iterator.
#[derive(Debug, Clone)]
pub struct WrapSome<I> {
    inner: I,
}

impl<I: Iterator> Iterator for WrapSome<I> {
    type Item = Option<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Some)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for WrapSome<I> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<I: FusedIterator> FusedIterator for WrapSome<I> {}
