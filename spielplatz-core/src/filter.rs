//! Filter predicates and district aggregation over a playground collection.

use std::collections::BTreeMap;

use crate::model::{FilterCriteria, FilterToggle, Playground};

/// Label used by [`count_by_district`] for playgrounds outside every district.
pub const UNASSIGNED_DISTRICT: &str = "unassigned";

impl FilterCriteria {
    /// Whether the playground satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, playground: &Playground) -> bool {
        let toggles_pass = FilterToggle::ALL
            .iter()
            .copied()
            .filter(|toggle| self.is_active(*toggle))
            .all(|toggle| toggle_passes(toggle, playground));

        toggles_pass
            && self
                .district_filter()
                .is_none_or(|wanted| playground.district.as_deref() == Some(wanted))
    }
}

fn toggle_passes(toggle: FilterToggle, playground: &Playground) -> bool {
    match toggle {
        FilterToggle::Accessible => playground.is_accessible(),
        FilterToggle::WaterPlayground => playground.is_water_playground,
        equipment_toggle => equipment_toggle
            .equipment()
            .is_some_and(|equipment| playground.has_equipment(equipment)),
    }
}

/// Playgrounds matching `criteria`, in input order.
#[must_use]
pub fn apply(playgrounds: &[Playground], criteria: &FilterCriteria) -> Vec<Playground> {
    playgrounds
        .iter()
        .filter(|playground| criteria.matches(playground))
        .cloned()
        .collect()
}

/// Number of playgrounds per district; unassigned ones are grouped under
/// [`UNASSIGNED_DISTRICT`].
#[must_use]
pub fn count_by_district(playgrounds: &[Playground]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for playground in playgrounds {
        let label = playground
            .district
            .as_deref()
            .unwrap_or(UNASSIGNED_DISTRICT);
        *counts.entry(label.to_owned()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::Equipment;
    use crate::model::{Coordinate, SourceKind, Tags};

    fn playground(id: u64, district: Option<&str>, equipment: &[Equipment]) -> Playground {
        Playground {
            id,
            source_kind: SourceKind::Node,
            name: format!("Playground #{id}"),
            position: Coordinate::new(50.0, 8.27),
            district: district.map(str::to_owned),
            is_water_playground: false,
            tags: Tags::new(),
            equipment: equipment.to_vec(),
        }
    }

    #[fixture]
    fn playgrounds() -> Vec<Playground> {
        let mut accessible = playground(3, Some("Neustadt"), &[Equipment::Slide]);
        accessible
            .tags
            .insert("wheelchair".to_owned(), "yes".to_owned());
        let mut splash = playground(4, None, &[Equipment::Water]);
        splash.is_water_playground = true;
        let mut named_splash = playground(5, Some("Weisenau"), &[]);
        named_splash.is_water_playground = true;

        vec![
            playground(1, Some("Altstadt"), &[Equipment::Swing, Equipment::Slide]),
            playground(2, Some("Altstadt"), &[Equipment::ClimbingFrame, Equipment::Sandpit]),
            accessible,
            splash,
            named_splash,
        ]
    }

    fn ids(playgrounds: &[Playground]) -> Vec<u64> {
        playgrounds.iter().map(|playground| playground.id).collect()
    }

    #[rstest]
    fn empty_criteria_is_identity(playgrounds: Vec<Playground>) {
        assert_eq!(apply(&playgrounds, &FilterCriteria::default()), playgrounds);
    }

    #[rstest]
    #[case(FilterToggle::Swing, vec![1])]
    #[case(FilterToggle::Slide, vec![1, 3])]
    #[case(FilterToggle::Sandpit, vec![2])]
    #[case(FilterToggle::Water, vec![4])]
    #[case(FilterToggle::Climbing, vec![2])]
    #[case(FilterToggle::Accessible, vec![3])]
    #[case(FilterToggle::WaterPlayground, vec![4, 5])]
    fn single_toggle(
        playgrounds: Vec<Playground>,
        #[case] toggle: FilterToggle,
        #[case] expected: Vec<u64>,
    ) {
        let mut criteria = FilterCriteria::default();
        criteria.toggle(toggle);
        assert_eq!(ids(&apply(&playgrounds, &criteria)), expected);
    }

    #[rstest]
    fn criteria_combine_with_and(playgrounds: Vec<Playground>) {
        let criteria = FilterCriteria {
            has_slide: true,
            district: Some("Altstadt".to_owned()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&playgrounds, &criteria)), vec![1]);
    }

    #[rstest]
    fn district_never_matches_unassigned(playgrounds: Vec<Playground>) {
        let criteria = FilterCriteria {
            district: Some(UNASSIGNED_DISTRICT.to_owned()),
            ..FilterCriteria::default()
        };
        assert!(apply(&playgrounds, &criteria).is_empty());
    }

    #[rstest]
    fn empty_district_is_identity(playgrounds: Vec<Playground>) {
        let mut criteria = FilterCriteria::default();
        criteria.set_district(Some(""));
        assert_eq!(apply(&playgrounds, &criteria), playgrounds);

        let direct = FilterCriteria {
            district: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&playgrounds, &direct), playgrounds);
    }

    #[rstest]
    fn district_match_is_exact(playgrounds: Vec<Playground>) {
        let criteria = FilterCriteria {
            district: Some("altstadt".to_owned()),
            ..FilterCriteria::default()
        };
        assert!(apply(&playgrounds, &criteria).is_empty());
    }

    #[test]
    fn counts_group_unassigned() {
        let playgrounds = vec![
            playground(1, Some("Altstadt"), &[]),
            playground(2, None, &[]),
            playground(3, Some("Altstadt"), &[]),
            playground(4, Some("Neustadt"), &[]),
            playground(5, None, &[]),
            playground(6, Some("Altstadt"), &[]),
        ];
        let counts = count_by_district(&playgrounds);
        let expected: BTreeMap<String, usize> = [
            ("Altstadt".to_owned(), 3),
            (UNASSIGNED_DISTRICT.to_owned(), 2),
            ("Neustadt".to_owned(), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn counts_of_empty_collection_are_empty() {
        assert!(count_by_district(&[]).is_empty());
    }

    fn arb_playground() -> impl Strategy<Value = Playground> {
        (
            any::<u64>(),
            prop::option::of(prop_oneof![Just("Altstadt"), Just("Neustadt"), Just("Finthen")]),
            prop::sample::subsequence(Equipment::ALL.to_vec(), 0..=Equipment::ALL.len()),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(id, district, equipment, water, accessible)| {
                let mut generated = playground(id, district, &equipment);
                generated.is_water_playground = water;
                if accessible {
                    generated
                        .tags
                        .insert("wheelchair".to_owned(), "yes".to_owned());
                }
                generated
            })
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::collection::vec(any::<bool>(), 7),
            prop::option::of(prop_oneof![Just("Altstadt"), Just("Neustadt"), Just("Finthen")]),
        )
            .prop_map(|(flags, district)| {
                let mut criteria = FilterCriteria::default();
                for (toggle, enabled) in FilterToggle::ALL.iter().zip(flags) {
                    if enabled {
                        criteria.toggle(*toggle);
                    }
                }
                criteria.set_district(district);
                criteria
            })
    }

    proptest! {
        #[test]
        fn apply_is_idempotent(
            playgrounds in prop::collection::vec(arb_playground(), 0..32),
            criteria in arb_criteria(),
        ) {
            let once = apply(&playgrounds, &criteria);
            prop_assert_eq!(apply(&once, &criteria), once);
        }

        #[test]
        fn apply_preserves_order(
            playgrounds in prop::collection::vec(arb_playground(), 0..32),
            criteria in arb_criteria(),
        ) {
            let filtered = apply(&playgrounds, &criteria);
            let mut remaining = playgrounds.iter();
            for kept in &filtered {
                prop_assert!(remaining.any(|candidate| candidate == kept));
            }
        }

        #[test]
        fn counts_sum_to_total(playgrounds in prop::collection::vec(arb_playground(), 0..32)) {
            let total: usize = count_by_district(&playgrounds).values().sum();
            prop_assert_eq!(total, playgrounds.len());
        }
    }
}
