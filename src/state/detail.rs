//! Product detail view and the gallery scoped beneath it.

use crate::error::ViewError;
use crate::state::catalog::CatalogStore;
use crate::state::gallery::{GalleryNavigator, Position};
use crate::state::types::{Product, ProductId};

/// Detail modal state: at most one open product, plus its gallery.
///
/// The product is held by id and resolved against the catalog on demand.
/// The gallery can only be open while the detail view is open; closing or
/// replacing the detail product closes it.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    /// Product currently shown, if any.
    open: Option<ProductId>,
    /// Highlighted thumbnail; start index for the gallery.
    thumb: usize,
    /// Zoom viewer over the open product's images.
    gallery: GalleryNavigator,
}

impl DetailView {
    /// Create a closed detail view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Open the detail view on `id`, replacing any open product.
    ///
    /// Inputs:
    /// - `catalog`: Current snapshot used to validate `id`
    /// - `id`: Product to show
    ///
    /// Output:
    /// - The resolved product
    ///
    /// # Errors
    /// - [`ViewError::ProductNotFound`] when `id` is not in `catalog`; state
    ///   is left unchanged.
    pub fn open<'a>(
        &mut self,
        catalog: &'a CatalogStore,
        id: &ProductId,
    ) -> Result<&'a Product, ViewError> {
        let product = catalog
            .get(id)
            .ok_or_else(|| ViewError::ProductNotFound { id: id.clone() })?;
        if self.open.as_ref() != Some(id) {
            self.gallery.close();
            self.thumb = 0;
        }
        self.open = Some(id.clone());
        tracing::debug!(product = %id, "detail view opened");
        Ok(product)
    }

    /// Close the detail view and any gallery beneath it. Idempotent.
    pub fn close(&mut self) {
        self.gallery.close();
        if self.open.take().is_some() {
            tracing::debug!("detail view closed");
        }
        self.thumb = 0;
    }

    /// Whether a product is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Id of the open product.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        self.open.as_ref()
    }

    /// Resolve the open product against `catalog`.
    #[must_use]
    pub fn product<'a>(&self, catalog: &'a CatalogStore) -> Option<&'a Product> {
        self.open.as_ref().and_then(|id| catalog.get(id))
    }

    /// Highlighted thumbnail index.
    #[must_use]
    pub const fn thumb(&self) -> usize {
        self.thumb
    }

    /// What: Move the thumbnail cursor by `delta`, wrapping around.
    ///
    /// Inputs:
    /// - `catalog`: Snapshot holding the open product
    /// - `delta`: Signed step
    ///
    /// Output:
    /// - New thumbnail index, or `None` when closed or the product has no images
    pub fn move_thumb(&mut self, catalog: &CatalogStore, delta: isize) -> Option<usize> {
        let len = self.product(catalog)?.images.len();
        if len == 0 {
            return None;
        }
        let len_i = isize::try_from(len).ok()?;
        let cur = isize::try_from(self.thumb).ok()?;
        self.thumb = usize::try_from((cur + delta).rem_euclid(len_i)).ok()?;
        Some(self.thumb)
    }

    /// What: Open the gallery on the detail product's images.
    ///
    /// Inputs:
    /// - `catalog`: Snapshot holding the open product
    /// - `start`: First image to show
    ///
    /// Output:
    /// - The gallery position indicator
    ///
    /// # Errors
    /// - [`ViewError::InvalidState`] when the detail view is closed
    /// - [`ViewError::ProductNotFound`] when the open product left the catalog
    /// - [`ViewError::InvalidGallery`] for an empty image set or bad index
    pub fn open_gallery(
        &mut self,
        catalog: &CatalogStore,
        start: usize,
    ) -> Result<Position, ViewError> {
        let id = self.open.as_ref().ok_or(ViewError::InvalidState("detail view"))?;
        let product = catalog
            .get(id)
            .ok_or_else(|| ViewError::ProductNotFound { id: id.clone() })?;
        self.gallery.open(product.images.clone(), start)
    }

    /// Open the gallery at the highlighted thumbnail.
    ///
    /// # Errors
    /// Same as [`DetailView::open_gallery`].
    pub fn open_gallery_at_thumb(&mut self, catalog: &CatalogStore) -> Result<Position, ViewError> {
        self.open_gallery(catalog, self.thumb)
    }

    /// Read access to the scoped gallery.
    #[must_use]
    pub const fn gallery(&self) -> &GalleryNavigator {
        &self.gallery
    }

    /// Step the gallery forward, wrapping at the end.
    ///
    /// # Errors
    /// - [`ViewError::InvalidState`] when the gallery is closed
    pub fn gallery_next(&mut self) -> Result<Position, ViewError> {
        self.gallery.next()
    }

    /// Step the gallery backward, wrapping at the start.
    ///
    /// # Errors
    /// - [`ViewError::InvalidState`] when the gallery is closed
    pub fn gallery_previous(&mut self) -> Result<Position, ViewError> {
        self.gallery.previous()
    }

    /// Close the gallery, keeping the detail view open. Idempotent.
    pub fn close_gallery(&mut self) {
        self.gallery.close();
    }
}
