//! Restartable, finite sequence generators.
//!
//! A [`Range`] holds nothing but its two inclusive bounds. Every call to
//! [`Range::iter`] (or every `for` loop over `&range`) hands out a fresh
//! iterator positioned at `start`, so the same instance can be traversed any
//! number of times and always yields the same values.
//!
//! ```
//! use exemplar::Range;
//!
//! let range = Range::new(1, 5)?;
//! assert_eq!(range.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! assert_eq!(range.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! # Ok::<(), exemplar::SequenceError>(())
//! ```

use std::{fmt, iter::FusedIterator, ops::RangeInclusive};

use crate::error::SequenceError;

/// An inclusive, ascending run of integers from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Creates a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvertedBounds`] if `start > end`.
    pub const fn new(start: i64, end: i64) -> Result<Self, SequenceError> {
        if start > end {
            return Err(SequenceError::InvertedBounds { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Starts a new traversal at `start`.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter(self.start..=self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single traversal over a [`Range`].
#[derive(Debug, Clone)]
pub struct Iter(RangeInclusive<i64>);

impl Iterator for Iter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl FusedIterator for Iter {}

const FIRST_LETTER: u8 = b'A';
const LAST_LETTER: u8 = b'Z';

/// The 26 upper-case letters of the Latin alphabet, `A` to `Z`.
///
/// Backed by a [`Range`] over the letters' character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    codes: Range,
}

impl Alphabet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            codes: Range {
                start: FIRST_LETTER as i64,
                end: LAST_LETTER as i64,
            },
        }
    }

    /// Starts a new traversal at `A`.
    #[must_use]
    pub fn iter(&self) -> Letters {
        Letters(self.codes.iter())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", char::from(FIRST_LETTER), char::from(LAST_LETTER))
    }
}

impl IntoIterator for &Alphabet {
    type Item = char;
    type IntoIter = Letters;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single traversal over an [`Alphabet`].
#[derive(Debug, Clone)]
pub struct Letters(Iter);

impl Letters {
    fn letter(code: i64) -> Option<char> {
        u8::try_from(code).ok().map(char::from)
    }
}

impl Iterator for Letters {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().and_then(Self::letter)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Letters {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().and_then(Self::letter)
    }
}

impl FusedIterator for Letters {}
