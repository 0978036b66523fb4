//! Compiled-in reference data for Mainz: bounding box, districts, equipment, and links.

use serde::{Deserialize, Serialize};

use crate::model::{BoundingBox, Coordinate};

/// Tag value marking a feature as present.
pub const AFFIRMATIVE: &str = "yes";

/// Tag holding the element name.
pub const NAME_TAG: &str = "name";
/// Tag holding the street of the element address.
pub const STREET_TAG: &str = "addr:street";
/// Tag holding wheelchair accessibility.
pub const WHEELCHAIR_TAG: &str = "wheelchair";
/// Tag holding the ground surface.
pub const SURFACE_TAG: &str = "surface";
/// Tag holding the operator.
pub const OPERATOR_TAG: &str = "operator";
/// Tag holding the minimum recommended age.
pub const MIN_AGE_TAG: &str = "min_age";
/// Tag holding the maximum recommended age.
pub const MAX_AGE_TAG: &str = "max_age";

/// Lowercase name fragment that marks a water playground ("Wasser").
pub const WATER_NAME_MARKER: &str = "wasser";

/// Area the city's playgrounds are fetched from and clipped to.
pub const MAINZ_BBOX: BoundingBox = BoundingBox {
    south: 49.9,
    west: 8.15,
    north: 50.05,
    east: 8.35,
};

/// Attribution link required when showing map data.
pub const OSM_COPYRIGHT_URL: &str = "https://www.openstreetmap.org/copyright";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Playground equipment recognized from `playground:*` tags.
pub enum Equipment {
    /// `playground:slide`
    Slide,
    /// `playground:swing`
    Swing,
    /// `playground:sandpit`
    Sandpit,
    /// `playground:seesaw`
    Seesaw,
    /// `playground:springy`
    Springy,
    /// `playground:climbing_frame`
    ClimbingFrame,
    /// `playground:carousel`
    Carousel,
    /// `playground:zipwire`
    Zipwire,
    /// `playground:playhouse`
    Playhouse,
    /// `playground:water`
    Water,
    /// `playground:basketball`
    Basketball,
    /// `playground:soccer`
    Soccer,
}

impl Equipment {
    /// Checklist order used when extracting equipment.
    pub const ALL: [Equipment; 12] = [
        Equipment::Slide,
        Equipment::Swing,
        Equipment::Sandpit,
        Equipment::Seesaw,
        Equipment::Springy,
        Equipment::ClimbingFrame,
        Equipment::Carousel,
        Equipment::Zipwire,
        Equipment::Playhouse,
        Equipment::Water,
        Equipment::Basketball,
        Equipment::Soccer,
    ];

    /// Source tag key carrying this equipment.
    #[must_use]
    pub const fn tag_key(self) -> &'static str {
        match self {
            Equipment::Slide => "playground:slide",
            Equipment::Swing => "playground:swing",
            Equipment::Sandpit => "playground:sandpit",
            Equipment::Seesaw => "playground:seesaw",
            Equipment::Springy => "playground:springy",
            Equipment::ClimbingFrame => "playground:climbing_frame",
            Equipment::Carousel => "playground:carousel",
            Equipment::Zipwire => "playground:zipwire",
            Equipment::Playhouse => "playground:playhouse",
            Equipment::Water => "playground:water",
            Equipment::Basketball => "playground:basketball",
            Equipment::Soccer => "playground:soccer",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Equipment::Slide => "Slide",
            Equipment::Swing => "Swing",
            Equipment::Sandpit => "Sandpit",
            Equipment::Seesaw => "Seesaw",
            Equipment::Springy => "Spring rider",
            Equipment::ClimbingFrame => "Climbing frame",
            Equipment::Carousel => "Carousel",
            Equipment::Zipwire => "Zip line",
            Equipment::Playhouse => "Playhouse",
            Equipment::Water => "Water play",
            Equipment::Basketball => "Basketball",
            Equipment::Soccer => "Soccer",
        }
    }

    /// Glyph shown next to the label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Equipment::Slide => "🛝",
            Equipment::Swing => "🎠",
            Equipment::Sandpit => "🏖️",
            Equipment::Seesaw => "⚖️",
            Equipment::Springy => "🐴",
            Equipment::ClimbingFrame => "🧗",
            Equipment::Carousel => "🎪",
            Equipment::Zipwire => "🚡",
            Equipment::Playhouse => "🏠",
            Equipment::Water => "💦",
            Equipment::Basketball => "🏀",
            Equipment::Soccer => "⚽",
        }
    }

    /// Resolve a `playground:*` tag key.
    #[must_use]
    pub fn from_tag_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|equipment| equipment.tag_key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A named district approximated by a rectangle.
pub struct DistrictRegion {
    /// District name.
    pub name: &'static str,
    /// Approximate extent.
    pub bounds: BoundingBox,
}

const fn region(
    name: &'static str,
    south: f64,
    north: f64,
    west: f64,
    east: f64,
) -> DistrictRegion {
    DistrictRegion {
        name,
        bounds: BoundingBox {
            south,
            west,
            north,
            east,
        },
    }
}

/// Districts in lookup priority order. Several rectangles overlap; the first
/// containing region wins, so this order must not change.
pub static DISTRICTS: [DistrictRegion; 15] = [
    region("Altstadt", 49.995, 50.01, 8.26, 8.285),
    region("Neustadt", 49.99, 50.01, 8.24, 8.27),
    region("Oberstadt", 49.97, 49.995, 8.24, 8.28),
    region("Bretzenheim", 49.97, 49.995, 8.19, 8.24),
    region("Gonsenheim", 49.99, 50.02, 8.19, 8.24),
    region("Finthen", 49.96, 49.99, 8.13, 8.19),
    region("Drais", 49.95, 49.97, 8.17, 8.21),
    region("Marienborn", 49.96, 49.98, 8.21, 8.25),
    region("Lerchenberg", 49.95, 49.97, 8.21, 8.25),
    region("Hechtsheim", 49.95, 49.975, 8.25, 8.30),
    region("Ebersheim", 49.92, 49.95, 8.26, 8.32),
    region("Weisenau", 49.97, 49.995, 8.28, 8.32),
    region("Laubenheim", 49.95, 49.975, 8.30, 8.35),
    region("Mombach", 50.00, 50.03, 8.21, 8.26),
    region("Hartenberg-Münchfeld", 49.99, 50.01, 8.22, 8.26),
];

/// District containing the coordinate, using first-match over [`DISTRICTS`].
#[must_use]
pub fn district_for(coord: Coordinate) -> Option<&'static str> {
    DISTRICTS
        .iter()
        .find(|district| district.bounds.contains(coord))
        .map(|district| district.name)
}

/// District names in catalog order.
pub fn district_names() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|district| district.name)
}

static DISTRICT_REFERENCE_URLS: [(&str, &str); 15] = [
    ("Altstadt", "https://www.jugend-in-mainz.de/kinderstadtplan/altstadt.html"),
    (
        "Bretzenheim",
        "https://www.jugend-in-mainz.de/kinderstadtplan/bretzenheim-/-zahlbach.html",
    ),
    ("Drais", "https://www.jugend-in-mainz.de/kinderstadtplan/drais.html"),
    ("Ebersheim", "https://www.jugend-in-mainz.de/kinderstadtplan/ebersheim.html"),
    ("Finthen", "https://www.jugend-in-mainz.de/kinderstadtplan/finthen.html"),
    ("Gonsenheim", "https://www.jugend-in-mainz.de/kinderstadtplan/gonsenheim.html"),
    (
        "Hartenberg-Münchfeld",
        "https://www.jugend-in-mainz.de/kinderstadtplan/hartenberg-muenchfeld.html",
    ),
    ("Hechtsheim", "https://www.jugend-in-mainz.de/kinderstadtplan/hechtsheim.html"),
    ("Laubenheim", "https://www.jugend-in-mainz.de/kinderstadtplan/laubenheim.html"),
    ("Lerchenberg", "https://www.jugend-in-mainz.de/kinderstadtplan/lerchenberg.html"),
    ("Marienborn", "https://www.jugend-in-mainz.de/kinderstadtplan/marienborn.html"),
    ("Mombach", "https://www.jugend-in-mainz.de/kinderstadtplan/mombach.html"),
    ("Neustadt", "https://www.jugend-in-mainz.de/kinderstadtplan/neustadt.html"),
    ("Oberstadt", "https://www.jugend-in-mainz.de/kinderstadtplan/oberstadt.html"),
    ("Weisenau", "https://www.jugend-in-mainz.de/kinderstadtplan/weisenau.html"),
];

/// Children's city map page for a district.
#[must_use]
pub fn district_reference_url(district: &str) -> Option<&'static str> {
    DISTRICT_REFERENCE_URLS
        .iter()
        .find(|(name, _url)| *name == district)
        .map(|(_name, url)| *url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Official page about playgrounds in the city.
pub struct OfficialSource {
    /// Short label.
    pub label: &'static str,
    /// Link target.
    pub url: &'static str,
}

/// Official playground resources.
pub static OFFICIAL_SOURCES: [OfficialSource; 5] = [
    OfficialSource {
        label: "Jugend-in-Mainz.de playgrounds",
        url: "https://www.jugend-in-mainz.de/spielplaetze.html",
    },
    OfficialSource {
        label: "Children's city map",
        url: "https://www.jugend-in-mainz.de/kinderstadtplan.html",
    },
    OfficialSource {
        label: "City of Mainz",
        url: "https://www.mainz.de/freizeit-und-sport/spielplaetze-wasserspielplaetze.php",
    },
    OfficialSource {
        label: "Water playgrounds",
        url: "https://www.jugend-in-mainz.de/wasserspielplaetze.html",
    },
    OfficialSource {
        label: "Report a defect",
        url: "mailto:gruen-umweltamt@stadt.mainz.de",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
/// Water playground run by the city, with seasonal opening hours.
pub struct KnownWaterPlayground {
    /// Official name.
    pub name: &'static str,
    /// Approximate location.
    pub position: Coordinate,
    /// District name.
    pub district: &'static str,
    /// Usual opening hours in summer.
    pub hours: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// The city's official water playgrounds.
pub static KNOWN_WATER_PLAYGROUNDS: [KnownWaterPlayground; 4] = [
    KnownWaterPlayground {
        name: "Meenzer Plitsch-Platsch-Platz (Volkspark)",
        position: Coordinate::new(50.0012, 8.2385),
        district: "Gonsenheim",
        hours: "approx. 10:00-18:00",
        description: "Large water playground in the Volkspark with lawns and mini golf",
    },
    KnownWaterPlayground {
        name: "Wasserspielplatz Hartenberg-Park",
        position: Coordinate::new(49.9985, 8.2315),
        district: "Hartenberg-Münchfeld",
        hours: "approx. 12:00-18:00",
        description: "Water playground with mini golf course and barbecue areas",
    },
    KnownWaterPlayground {
        name: "Wasserspielplatz Goetheanlage",
        position: Coordinate::new(49.9965, 8.2545),
        district: "Neustadt",
        hours: "approx. 11:00-18:00",
        description: "Popular water playground in the Neustadt",
    },
    KnownWaterPlayground {
        name: "Wasserspielplatz Weisenau",
        position: Coordinate::new(49.9785, 8.2915),
        district: "Weisenau",
        hours: "approx. 09:00-18:00",
        description: "Family-friendly water playground in Weisenau",
    },
];

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Coordinate::new(50.0, 8.27), Some("Altstadt"))]
    #[case(Coordinate::new(49.975, 8.15), Some("Finthen"))]
    #[case(Coordinate::new(49.93, 8.30), Some("Ebersheim"))]
    #[case(Coordinate::new(50.025, 8.22), Some("Mombach"))]
    #[case(Coordinate::new(49.91, 8.16), None)]
    fn district_lookup(#[case] coord: Coordinate, #[case] expected: Option<&str>) {
        assert_eq!(district_for(coord), expected);
    }

    #[test]
    fn overlap_resolves_to_first_listed_region() {
        // Inside both Altstadt and Neustadt; Altstadt is listed first.
        let overlap = Coordinate::new(50.0, 8.265);
        assert!(
            DISTRICTS
                .get(1)
                .is_some_and(|neustadt| neustadt.bounds.contains(overlap)),
            "also in Neustadt"
        );
        assert_eq!(district_for(overlap), Some("Altstadt"));
    }

    #[test]
    fn smaller_later_region_does_not_win() {
        // Also inside Hartenberg-Münchfeld and Mombach, both listed after Gonsenheim.
        let point = Coordinate::new(50.0, 8.23);
        assert!(
            DISTRICTS
                .last()
                .is_some_and(|last| last.bounds.contains(point)),
            "inside Hartenberg-Münchfeld"
        );
        assert_eq!(district_for(point), Some("Gonsenheim"));
    }

    #[test]
    fn district_edges_are_inclusive() {
        assert_eq!(district_for(Coordinate::new(49.92, 8.32)), Some("Ebersheim"));
    }

    #[test]
    fn every_district_has_reference_url() {
        for name in district_names() {
            assert!(
                district_reference_url(name).is_some(),
                "missing reference url for {name}"
            );
        }
        assert_eq!(district_reference_url("Wiesbaden"), None);
    }

    #[test]
    fn district_names_are_unique() {
        let mut names: Vec<&str> = district_names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DISTRICTS.len());
    }

    #[test]
    fn equipment_tag_keys_round_trip() {
        for equipment in Equipment::ALL {
            assert_eq!(Equipment::from_tag_key(equipment.tag_key()), Some(equipment));
        }
        assert_eq!(Equipment::from_tag_key("playground:trampoline"), None);
    }

    #[test]
    fn known_water_playgrounds_lie_inside_city() {
        for known in KNOWN_WATER_PLAYGROUNDS {
            assert!(MAINZ_BBOX.contains(known.position), "{} outside city", known.name);
        }
    }
}
