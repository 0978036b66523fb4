//! Traits describing the geodata source and its error type.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use serde_json::{Error as JsonError, Value};

use crate::model::BoundingBox;

#[derive(thiserror::Error, Debug)]
/// Errors that fail a whole ingestion run.
pub enum IngestError {
    /// The request could not be sent or the server answered with a failure status.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The response body did not have the expected structure.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] JsonError),
}

#[async_trait]
/// Trait for backends that return raw playground elements for an area.
pub trait ElementSource: Send + Sync {
    /// Short name of the backend, used in log output.
    fn name(&self) -> &str;

    /// Fetch every playground element inside `bbox`.
    ///
    /// The backend may over-return; callers clip to `bbox` themselves.
    /// Elements are returned undecoded so that one bad element cannot fail
    /// the batch.
    ///
    /// # Errors
    ///
    /// Returns an [`IngestError`] when the request fails or the body has no
    /// `elements` array.
    async fn fetch_elements(&self, bbox: &BoundingBox) -> Result<Vec<Value>, IngestError>;
}
