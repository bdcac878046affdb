// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, cyclic sets of image sources.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ViewportError;

/// A single image source and its caption.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSource {
    /// Reference resolvable by the host's image loader.
    pub uri: String,
    /// Caption shown alongside the image.
    pub caption: String,
}

impl ImageSource {
    /// Creates a source.
    pub fn new(uri: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            caption: caption.into(),
        }
    }

    /// File name suggested when the image is downloaded.
    ///
    /// This is the last path segment of the URI with any query or fragment
    /// removed, or the whole URI if it has no usable segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let end = self.uri.find(['?', '#']).unwrap_or(self.uri.len());
        let path = self.uri[..end].trim_end_matches('/');
        match path.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => &self.uri,
        }
    }
}

/// An ordered, non-empty list of sources with a current index.
///
/// The sources never change after construction; only the index moves, and it
/// wraps in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    sources: Vec<ImageSource>,
    index: usize,
}

impl ImageSet {
    /// Creates a set positioned at the first source.
    pub fn new(sources: impl IntoIterator<Item = ImageSource>) -> Result<Self, ViewportError> {
        let sources: Vec<_> = sources.into_iter().collect();
        if sources.is_empty() {
            return Err(ViewportError::EmptyImageSet);
        }
        Ok(Self { sources, index: 0 })
    }

    /// Number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always `false`; sets are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Index of the current source.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current source.
    #[must_use]
    pub fn current(&self) -> &ImageSource {
        &self.sources[self.index]
    }

    /// All sources in order.
    #[must_use]
    pub fn sources(&self) -> &[ImageSource] {
        &self.sources
    }

    /// Whether there is more than one source to cycle through.
    #[must_use]
    pub fn is_cyclable(&self) -> bool {
        self.sources.len() > 1
    }

    /// Moves the index by `direction` steps, wrapping, and returns the new index.
    pub fn cycle(&mut self, direction: isize) -> usize {
        let len = self.sources.len();
        let step = direction.rem_euclid(len as isize) as usize;
        self.index = (self.index + step) % len;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::{ImageSet, ImageSource};
    use crate::ViewportError;

    fn set(n: usize) -> ImageSet {
        ImageSet::new((0..n).map(|i| ImageSource::new(format!("img/{i}.png"), format!("#{i}"))))
            .expect("non-empty")
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(
            ImageSet::new(Vec::new()),
            Err(ViewportError::EmptyImageSet)
        );
    }

    #[test]
    fn forward_cycle_wraps_to_start() {
        let mut images = set(4);
        for _ in 0..4 {
            images.cycle(1);
        }
        assert_eq!(images.index(), 0);
    }

    #[test]
    fn backward_cycle_from_start_goes_to_last() {
        let mut images = set(4);
        assert_eq!(images.cycle(-1), 3);
        assert_eq!(images.current().caption, "#3");
    }

    #[test]
    fn large_steps_are_reduced_modulo_length() {
        let mut images = set(3);
        assert_eq!(images.cycle(7), 1);
        assert_eq!(images.cycle(-5), 2);
    }

    #[test]
    fn single_image_set_is_not_cyclable() {
        let mut images = set(1);
        assert!(!images.is_cyclable());
        assert_eq!(images.cycle(1), 0);
        assert!(set(2).is_cyclable());
    }

    #[test]
    fn file_name_strips_path_query_and_fragment() {
        let cases = [
            ("https://host/a/b/plot.png", "plot.png"),
            ("plots/run-3.jpg?v=2", "run-3.jpg"),
            ("figure.svg#frame", "figure.svg"),
            ("data/dir/", "dir"),
            ("", ""),
        ];
        for (uri, expected) in cases {
            assert_eq!(ImageSource::new(uri, "").file_name(), expected, "{uri}");
        }
    }
}
