// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay image carousel.

/// One step of the carousel: the image losing `active` and the one gaining it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Advance {
    /// Index that was active.
    pub previous: usize,
    /// Index that is now active.
    pub next: usize,
}

/// Cycles an active index over a fixed number of images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Creates a carousel over `len` images, starting at the first.
    ///
    /// Returns `None` when there are no images.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    /// Currently active image.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next image, wrapping after the last.
    pub fn advance(&mut self) -> Advance {
        let previous = self.index;
        self.index = (self.index + 1) % self.len;
        Advance {
            previous,
            next: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut c = Carousel::new(3).expect("non-empty");
        assert_eq!(c.advance(), Advance { previous: 0, next: 1 });
        assert_eq!(c.advance(), Advance { previous: 1, next: 2 });
        assert_eq!(c.advance(), Advance { previous: 2, next: 0 });
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn single_image_stays_put() {
        let mut c = Carousel::new(1).expect("non-empty");
        assert_eq!(c.advance(), Advance { previous: 0, next: 0 });
    }

    #[test]
    fn empty_is_none() {
        assert!(Carousel::new(0).is_none());
    }
}
