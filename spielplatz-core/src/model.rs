//! Domain data structures for playgrounds, coordinates, snapshots, and filter criteria.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{AFFIRMATIVE, Equipment, WHEELCHAIR_TAG};

/// Raw key/value attributes of a source element.
pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Geometry kind of the OpenStreetMap element a playground was derived from.
pub enum SourceKind {
    /// Single coordinate.
    Node,
    /// Area; the position is the server-provided centroid.
    Way,
    /// Multi-area; the position is the server-provided centroid.
    Relation,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            SourceKind::Node => "node",
            SourceKind::Way => "way",
            SourceKind::Relation => "relation",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// WGS84 latitude/longitude pair.
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Axis-aligned rectangle with inclusive edges.
pub struct BoundingBox {
    /// Southern latitude.
    pub south: f64,
    /// Western longitude.
    pub west: f64,
    /// Northern latitude.
    pub north: f64,
    /// Eastern longitude.
    pub east: f64,
}

impl BoundingBox {
    /// Whether the coordinate lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.lat >= self.south
            && coord.lat <= self.north
            && coord.lon >= self.west
            && coord.lon <= self.east
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A classified playground ready for display and filtering.
pub struct Playground {
    /// OpenStreetMap element id.
    pub id: u64,
    /// Geometry kind of the source element.
    pub source_kind: SourceKind,
    /// Display name, never empty.
    pub name: String,
    /// Representative coordinate inside the city bounding box.
    pub position: Coordinate,
    /// District the position falls into, if any.
    pub district: Option<String>,
    /// Whether this is a water playground.
    pub is_water_playground: bool,
    /// Unmodified source attributes.
    pub tags: Tags,
    /// Recognized equipment in catalog order.
    pub equipment: Vec<Equipment>,
}

impl Playground {
    /// Whether the playground lists the given equipment.
    #[must_use]
    pub fn has_equipment(&self, equipment: Equipment) -> bool {
        self.equipment.contains(&equipment)
    }

    /// Whether the source marks the playground as wheelchair accessible.
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.tag(WHEELCHAIR_TAG) == Some(AFFIRMATIVE)
    }

    /// Look up a raw source attribute.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Link to the element on openstreetmap.org.
    #[must_use]
    pub fn osm_url(&self) -> String {
        format!("https://www.openstreetmap.org/{}/{}", self.source_kind, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One of the boolean filter switches.
pub enum FilterToggle {
    /// Has a swing.
    Swing,
    /// Has a slide.
    Slide,
    /// Has a sandpit.
    Sandpit,
    /// Has water play equipment.
    Water,
    /// Has a climbing frame.
    Climbing,
    /// Wheelchair accessible.
    Accessible,
    /// Is a water playground.
    WaterPlayground,
}

impl FilterToggle {
    /// All toggles in display order.
    pub const ALL: [FilterToggle; 7] = [
        FilterToggle::Swing,
        FilterToggle::Slide,
        FilterToggle::Sandpit,
        FilterToggle::Water,
        FilterToggle::Climbing,
        FilterToggle::Accessible,
        FilterToggle::WaterPlayground,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FilterToggle::Swing => "Swing",
            FilterToggle::Slide => "Slide",
            FilterToggle::Sandpit => "Sandpit",
            FilterToggle::Water => "Water play",
            FilterToggle::Climbing => "Climbing",
            FilterToggle::Accessible => "Accessible",
            FilterToggle::WaterPlayground => "Water playground",
        }
    }

    /// Glyph shown next to the label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            FilterToggle::Swing => "🎠",
            FilterToggle::Slide => "🛝",
            FilterToggle::Sandpit => "🏖️",
            FilterToggle::Water => "💦",
            FilterToggle::Climbing => "🧗",
            FilterToggle::Accessible => "♿",
            FilterToggle::WaterPlayground => "🌊",
        }
    }

    /// Equipment the toggle tests for, if it is an equipment toggle.
    #[must_use]
    pub const fn equipment(self) -> Option<Equipment> {
        match self {
            FilterToggle::Swing => Some(Equipment::Swing),
            FilterToggle::Slide => Some(Equipment::Slide),
            FilterToggle::Sandpit => Some(Equipment::Sandpit),
            FilterToggle::Water => Some(Equipment::Water),
            FilterToggle::Climbing => Some(Equipment::ClimbingFrame),
            FilterToggle::Accessible | FilterToggle::WaterPlayground => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent filter switch"
)]
/// Sparse filter criteria; `false`/`None` fields impose no constraint.
pub struct FilterCriteria {
    /// Require a swing.
    pub has_swing: bool,
    /// Require a slide.
    pub has_slide: bool,
    /// Require a sandpit.
    pub has_sandpit: bool,
    /// Require water play equipment.
    pub has_water: bool,
    /// Require a climbing frame.
    pub has_climbing: bool,
    /// Require wheelchair accessibility.
    pub is_accessible: bool,
    /// Require a water playground.
    pub is_water_playground: bool,
    /// Require an exact district match; an empty name imposes no constraint.
    pub district: Option<String>,
}

impl FilterCriteria {
    /// Whether the given toggle is active.
    #[must_use]
    pub const fn is_active(&self, toggle: FilterToggle) -> bool {
        match toggle {
            FilterToggle::Swing => self.has_swing,
            FilterToggle::Slide => self.has_slide,
            FilterToggle::Sandpit => self.has_sandpit,
            FilterToggle::Water => self.has_water,
            FilterToggle::Climbing => self.has_climbing,
            FilterToggle::Accessible => self.is_accessible,
            FilterToggle::WaterPlayground => self.is_water_playground,
        }
    }

    /// Flip a toggle on or off.
    pub fn toggle(&mut self, toggle: FilterToggle) {
        let flag = match toggle {
            FilterToggle::Swing => &mut self.has_swing,
            FilterToggle::Slide => &mut self.has_slide,
            FilterToggle::Sandpit => &mut self.has_sandpit,
            FilterToggle::Water => &mut self.has_water,
            FilterToggle::Climbing => &mut self.has_climbing,
            FilterToggle::Accessible => &mut self.is_accessible,
            FilterToggle::WaterPlayground => &mut self.is_water_playground,
        };
        *flag = !*flag;
    }

    /// Restrict to a district, or lift the restriction with `None` or an
    /// empty name.
    pub fn set_district<S: Into<String>>(&mut self, district: Option<S>) {
        self.district = district.map(Into::into).filter(|name| !name.is_empty());
    }

    /// District restriction in effect, if any.
    #[must_use]
    pub fn district_filter(&self) -> Option<&str> {
        self.district.as_deref().filter(|name| !name.is_empty())
    }

    /// Reset every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of active criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let toggles = FilterToggle::ALL
            .iter()
            .filter(|toggle| self.is_active(**toggle))
            .count();
        toggles + usize::from(self.district_filter().is_some())
    }

    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

#[derive(Debug, Clone)]
/// Immutable result of one successful ingestion run.
pub struct Snapshot {
    playgrounds: Arc<[Playground]>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Wrap a classified collection.
    #[must_use]
    pub fn new(playgrounds: Vec<Playground>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            playgrounds: playgrounds.into(),
            fetched_at,
        }
    }

    /// Playgrounds in source order.
    #[must_use]
    pub fn playgrounds(&self) -> &[Playground] {
        &self.playgrounds
    }

    /// When the data was fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of playgrounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.playgrounds.len()
    }

    /// Whether the snapshot holds no playgrounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playgrounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground_with_tags(tags: &[(&str, &str)]) -> Playground {
        Playground {
            id: 7,
            source_kind: SourceKind::Way,
            name: "Test".to_owned(),
            position: Coordinate::new(50.0, 8.27),
            district: None,
            is_water_playground: false,
            tags: tags
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect(),
            equipment: Vec::new(),
        }
    }

    #[test]
    fn bounding_box_edges_are_inclusive() {
        let bbox = BoundingBox {
            south: 1.0,
            west: 2.0,
            north: 3.0,
            east: 4.0,
        };
        assert!(bbox.contains(Coordinate::new(1.0, 2.0)), "south-west corner");
        assert!(bbox.contains(Coordinate::new(3.0, 4.0)), "north-east corner");
        assert!(!bbox.contains(Coordinate::new(3.000_001, 3.0)), "north of box");
        assert!(!bbox.contains(Coordinate::new(2.0, 1.999_999)), "west of box");
    }

    #[test]
    fn osm_url_uses_source_kind() {
        let playground = playground_with_tags(&[]);
        assert_eq!(playground.osm_url(), "https://www.openstreetmap.org/way/7");
    }

    #[test]
    fn accessibility_requires_exact_yes() {
        assert!(playground_with_tags(&[("wheelchair", "yes")]).is_accessible());
        assert!(!playground_with_tags(&[("wheelchair", "limited")]).is_accessible());
        assert!(!playground_with_tags(&[("wheelchair", "Yes")]).is_accessible());
        assert!(!playground_with_tags(&[]).is_accessible());
    }

    #[test]
    fn toggling_twice_restores_criteria() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle(FilterToggle::Slide);
        assert!(criteria.has_slide);
        assert_eq!(criteria.active_count(), 1);
        criteria.toggle(FilterToggle::Slide);
        assert!(criteria.is_empty());
    }

    #[test]
    fn clear_resets_district_and_toggles() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle(FilterToggle::Accessible);
        criteria.set_district(Some("Finthen"));
        assert_eq!(criteria.active_count(), 2);
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn empty_district_lifts_restriction() {
        let mut criteria = FilterCriteria::default();
        criteria.set_district(Some("Finthen"));
        criteria.set_district(Some(""));
        assert_eq!(criteria.district, None);
        assert!(criteria.is_empty());

        let direct = FilterCriteria {
            district: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert_eq!(direct.district_filter(), None);
        assert_eq!(direct.active_count(), 0);
    }

    #[test]
    fn equipment_toggles_map_to_catalog() {
        assert_eq!(
            FilterToggle::Climbing.equipment(),
            Some(Equipment::ClimbingFrame)
        );
        assert_eq!(FilterToggle::WaterPlayground.equipment(), None);
    }
}
