//! Turns raw Overpass elements into classified [`Playground`]s.
//!
//! Classification is pure: the same element always yields the same playground.
//! Elements that do not decode, lack a usable coordinate, or fall outside the
//! city bounding box are skipped, never reported as errors.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{
    AFFIRMATIVE, Equipment, NAME_TAG, STREET_TAG, WATER_NAME_MARKER, district_for,
};
use crate::model::{BoundingBox, Coordinate, Playground, SourceKind, Tags};

/// Top-level Overpass JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResponse {
    /// Returned elements in source order, decoded one by one during
    /// classification.
    pub elements: Vec<Value>,
}

/// Single element as returned by `out center tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    /// Geometry kind.
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// OpenStreetMap id.
    pub id: u64,
    /// Latitude, present on nodes.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, present on nodes.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Server-computed centroid, present on ways and relations.
    #[serde(default)]
    pub center: Option<Coordinate>,
    /// Raw tags.
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why an element was left out of the result.
pub enum Skip {
    /// Element did not have the expected shape.
    Malformed,
    /// Node without coordinates, or area without a centroid.
    MissingCoordinate,
    /// Coordinate lies outside the bounding box.
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counts of accepted and skipped elements for one run.
pub struct ClassifyReport {
    /// Elements turned into playgrounds.
    pub accepted: usize,
    /// Elements that could not be decoded.
    pub malformed: usize,
    /// Elements without a usable coordinate.
    pub missing_coordinate: usize,
    /// Elements outside the bounding box.
    pub out_of_bounds: usize,
}

impl ClassifyReport {
    /// Total number of skipped elements.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.malformed + self.missing_coordinate + self.out_of_bounds
    }
}

/// Classify every element, keeping source order.
#[must_use]
pub fn classify_elements(
    elements: Vec<Value>,
    bbox: &BoundingBox,
) -> (Vec<Playground>, ClassifyReport) {
    let mut report = ClassifyReport::default();
    let mut playgrounds = Vec::with_capacity(elements.len());

    for (index, value) in elements.into_iter().enumerate() {
        let classified =
            decode_element(value).and_then(|element| classify_element(element, bbox));
        match classified {
            Ok(playground) => {
                report.accepted += 1;
                playgrounds.push(playground);
            }
            Err(skip) => {
                log::trace!("skipping element at index {index}: {skip:?}");
                match skip {
                    Skip::Malformed => report.malformed += 1,
                    Skip::MissingCoordinate => report.missing_coordinate += 1,
                    Skip::OutOfBounds => report.out_of_bounds += 1,
                }
            }
        }
    }

    log::debug!(
        "classified {} playgrounds ({} malformed, {} without coordinate, {} out of bounds)",
        report.accepted,
        report.malformed,
        report.missing_coordinate,
        report.out_of_bounds
    );

    (playgrounds, report)
}

/// Decode one raw JSON element.
///
/// # Errors
///
/// Returns [`Skip::Malformed`] when the value is not a node, way, or relation
/// with a numeric id, numeric coordinates, and string tag values.
pub fn decode_element(value: Value) -> Result<RawElement, Skip> {
    serde_json::from_value(value).map_err(|err| {
        log::trace!("element does not decode: {err}");
        Skip::Malformed
    })
}

/// Classify a single element.
///
/// # Errors
///
/// Returns the [`Skip`] reason when the element has no usable coordinate or
/// lies outside `bbox`.
pub fn classify_element(element: RawElement, bbox: &BoundingBox) -> Result<Playground, Skip> {
    let position = resolve_position(&element).ok_or(Skip::MissingCoordinate)?;
    if !bbox.contains(position) {
        return Err(Skip::OutOfBounds);
    }

    let RawElement { kind, id, tags, .. } = element;

    let equipment = extract_equipment(&tags);
    let district = district_for(position);
    let is_water_playground = detect_water_playground(&tags, &equipment);
    let name = display_name(&tags, district, id);

    Ok(Playground {
        id,
        source_kind: kind,
        name,
        position,
        district: district.map(str::to_owned),
        is_water_playground,
        tags,
        equipment,
    })
}

fn resolve_position(element: &RawElement) -> Option<Coordinate> {
    match element.kind {
        SourceKind::Node => Some(Coordinate::new(element.lat?, element.lon?)),
        SourceKind::Way | SourceKind::Relation => element.center,
    }
}

/// Equipment whose tag is exactly `yes`, in checklist order.
#[must_use]
pub fn extract_equipment(tags: &Tags) -> Vec<Equipment> {
    Equipment::ALL
        .iter()
        .copied()
        .filter(|equipment| is_affirmative(tags, equipment.tag_key()))
        .collect()
}

/// Whether any of the water signals is present: water equipment tag, a name
/// containing "wasser", or water equipment already extracted.
#[must_use]
pub fn detect_water_playground(tags: &Tags, equipment: &[Equipment]) -> bool {
    is_affirmative(tags, Equipment::Water.tag_key())
        || tags
            .get(NAME_TAG)
            .is_some_and(|name| name.to_lowercase().contains(WATER_NAME_MARKER))
        || equipment.contains(&Equipment::Water)
}

/// Source name, or a generated one from street, district, or id.
#[must_use]
pub fn display_name(tags: &Tags, district: Option<&str>, id: u64) -> String {
    if let Some(name) = non_empty_tag(tags, NAME_TAG) {
        return name.to_owned();
    }

    if let Some(street) = non_empty_tag(tags, STREET_TAG) {
        format!("Playground at {street}")
    } else if let Some(district) = district {
        format!("Playground in {district}")
    } else {
        format!("Playground #{id}")
    }
}

fn is_affirmative(tags: &Tags, key: &str) -> bool {
    tags.get(key).is_some_and(|value| value == AFFIRMATIVE)
}

fn non_empty_tag<'a>(tags: &'a Tags, key: &str) -> Option<&'a str> {
    tags.get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
