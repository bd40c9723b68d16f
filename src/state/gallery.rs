//! Image gallery (zoom viewer) navigation state.

use std::fmt;

use crate::error::ViewError;

/// Position indicator for the gallery: zero-based index and image count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based index of the current image.
    pub index: usize,
    /// Number of images in the open set.
    pub total: usize,
}

impl fmt::Display for Position {
    /// Human form is one-based: `"2 / 3"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.total)
    }
}

/// Wraparound navigator over an ordered image set.
///
/// When open, `images` is non-empty and `current < images.len()`. When closed
/// the image set is stale and never exposed.
#[derive(Debug, Clone, Default)]
pub struct GalleryNavigator {
    /// Image URIs of the last activation.
    images: Vec<String>,
    /// Index into `images`.
    current: usize,
    /// Whether the gallery is showing.
    open: bool,
}

impl GalleryNavigator {
    /// Create a closed navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Open the gallery on `images` at `start`.
    ///
    /// Inputs:
    /// - `images`: Ordered image URIs
    /// - `start`: Index to show first
    ///
    /// Output:
    /// - The new position indicator
    ///
    /// # Errors
    /// - [`ViewError::InvalidGallery`] when `images` is empty or `start` is out
    ///   of range; the navigator is left closed.
    pub fn open(&mut self, images: Vec<String>, start: usize) -> Result<Position, ViewError> {
        if start >= images.len() {
            let len = images.len();
            self.close();
            return Err(ViewError::InvalidGallery { len, start });
        }
        self.images = images;
        self.current = start;
        self.open = true;
        tracing::debug!(index = start, total = self.images.len(), "gallery opened");
        Ok(self.position_unchecked())
    }

    /// Close the gallery. Closing an already closed gallery is a no-op.
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("gallery closed");
        }
        self.open = false;
    }

    /// Advance to the next image, wrapping from last to first.
    ///
    /// # Errors
    /// [`ViewError::InvalidState`] when the gallery is closed.
    pub fn next(&mut self) -> Result<Position, ViewError> {
        self.ensure_open()?;
        self.current = (self.current + 1) % self.images.len();
        Ok(self.position_unchecked())
    }

    /// Go back to the previous image, wrapping from first to last.
    ///
    /// # Errors
    /// [`ViewError::InvalidState`] when the gallery is closed.
    pub fn previous(&mut self) -> Result<Position, ViewError> {
        self.ensure_open()?;
        let len = self.images.len();
        self.current = (self.current + len - 1) % len;
        Ok(self.position_unchecked())
    }

    /// Whether the gallery is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current position, only while open.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.open.then(|| self.position_unchecked())
    }

    /// URI of the image being shown, only while open.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        if self.open {
            self.images.get(self.current).map(String::as_str)
        } else {
            None
        }
    }

    /// Guard for navigation operations.
    const fn ensure_open(&self) -> Result<(), ViewError> {
        if self.open {
            Ok(())
        } else {
            Err(ViewError::InvalidState("gallery"))
        }
    }

    /// Recompute the indicator from the current fields.
    const fn position_unchecked(&self) -> Position {
        Position {
            index: self.current,
            total: self.images.len(),
        }
    }
}
