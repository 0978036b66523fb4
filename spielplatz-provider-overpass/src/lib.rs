//! Element source for playgrounds using the OpenStreetMap Overpass API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use spielplatz_core::{
    classify::RawResponse,
    model::BoundingBox,
    ports::{ElementSource, IngestError},
};

/// Public Overpass interpreter endpoint.
pub const OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Server-side query timeout in seconds.
const QUERY_TIMEOUT_SECS: u32 = 30;

/// Build the Overpass QL query for playground nodes and ways inside `bbox`.
#[must_use]
pub fn build_query(bbox: &BoundingBox) -> String {
    // Overpass expects (south, west, north, east).
    let area = format!("({},{},{},{})", bbox.south, bbox.west, bbox.north, bbox.east);
    format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n\
         (\n  \
         way[\"leisure\"=\"playground\"]{area};\n  \
         node[\"leisure\"=\"playground\"]{area};\n\
         );\n\
         out center tags;\n"
    )
}

/// Parse an Overpass JSON body into its undecoded elements.
///
/// Only the envelope is checked here; single elements are decoded during
/// classification.
///
/// # Errors
///
/// Returns [`IngestError::MalformedResponse`] when the body is not JSON or has
/// no `elements` array.
pub fn parse_response(body: &str) -> Result<Vec<Value>, IngestError> {
    let response: RawResponse = serde_json::from_str(body)?;
    Ok(response.elements)
}

/// Playground source querying an Overpass interpreter.
pub struct OverpassSource {
    client: Client,
    endpoint: String,
}

impl OverpassSource {
    /// Create a source bound to the given HTTP client and the public endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, OVERPASS_ENDPOINT)
    }

    /// Create a source talking to another interpreter, e.g. a mirror.
    #[must_use]
    pub fn with_endpoint<S: Into<String>>(client: Client, endpoint: S) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Interpreter URL in use.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, bbox: &BoundingBox) -> RequestBuilder {
        self.client
            .post(&self.endpoint)
            .form(&[("data", build_query(bbox))])
    }
}

#[async_trait]
impl ElementSource for OverpassSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_elements(&self, bbox: &BoundingBox) -> Result<Vec<Value>, IngestError> {
        let body = fetch_text(self.request(bbox)).await?;
        let elements = parse_response(&body)?;
        log::debug!("{} returned {} elements", self.endpoint, elements.len());
        Ok(elements)
    }
}

/// Build the Overpass source as a shareable [`ElementSource`].
#[must_use]
pub fn source(client: Client) -> Arc<dyn ElementSource> {
    Arc::new(OverpassSource::new(client))
}

// Send the request and read the body, treating failure statuses as network errors.
async fn fetch_text(req: RequestBuilder) -> Result<String, IngestError> {
    let response = req.send().await.map_err(IngestError::from)?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("overpass answered with status {status}");
    }

    response
        .error_for_status()
        .map_err(IngestError::from)?
        .text()
        .await
        .map_err(IngestError::from)
}
