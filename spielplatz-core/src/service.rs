//! High-level service facade running the ingestion pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::catalog::MAINZ_BBOX;
use crate::classify::classify_elements;
use crate::model::{BoundingBox, Snapshot};
use crate::ports::{ElementSource, IngestError};

/// Public entry point for loading classified playgrounds.
pub struct PlaygroundService {
    source: Arc<dyn ElementSource>,
    bbox: BoundingBox,
}

impl PlaygroundService {
    /// Create a new service fetching the Mainz area from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ElementSource>) -> Self {
        Self {
            source,
            bbox: MAINZ_BBOX,
        }
    }

    /// Area queried and clipped to.
    #[must_use]
    pub const fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Fetch and classify all playgrounds.
    ///
    /// Each call runs from scratch; the returned snapshot is complete or the
    /// call fails without partial data.
    ///
    /// # Errors
    ///
    /// Returns an [`IngestError`] if the source request fails or its response is malformed.
    pub async fn ingest(&self) -> Result<Snapshot, IngestError> {
        log::debug!("fetching playground elements from {}", self.source.name());
        let elements = self.source.fetch_elements(&self.bbox).await?;
        let (playgrounds, report) = classify_elements(elements, &self.bbox);
        if report.skipped() > 0 {
            log::debug!("{} elements skipped during classification", report.skipped());
        }
        Ok(Snapshot::new(playgrounds, Utc::now()))
    }
}
