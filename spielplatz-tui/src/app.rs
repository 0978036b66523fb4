use std::sync::Arc;

use spielplatz_core::{
    catalog::DISTRICTS,
    filter,
    model::{FilterCriteria, FilterToggle, Playground, Snapshot},
    service::PlaygroundService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    List,
    Detail,
    Districts,
}

pub(crate) struct App {
    pub service: Arc<PlaygroundService>,

    pub screen: Screen,
    pub snapshot: Option<Snapshot>,
    pub criteria: FilterCriteria,
    pub view: Vec<Playground>,
    pub list_index: usize,
    district_cursor: Option<usize>,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<PlaygroundService>) -> Self {
        Self {
            service,
            screen: Screen::List,
            snapshot: None,
            criteria: FilterCriteria::default(),
            view: Vec::new(),
            list_index: 0,
            district_cursor: None,
            is_loading: false,
            error_message: None,
        }
    }

    /// Publish a freshly ingested snapshot, replacing the previous one.
    pub(crate) fn set_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.refresh_view();
    }

    /// Re-derive the filtered view from the snapshot and criteria.
    pub(crate) fn refresh_view(&mut self) {
        self.view = self
            .snapshot
            .as_ref()
            .map(|snapshot| filter::apply(snapshot.playgrounds(), &self.criteria))
            .unwrap_or_default();

        if self.list_index >= self.view.len() {
            self.list_index = self.view.len().saturating_sub(1);
        }
        if self.view.is_empty() && self.screen == Screen::Detail {
            self.screen = Screen::List;
        }
    }

    pub(crate) fn toggle_filter(&mut self, toggle: FilterToggle) {
        self.criteria.toggle(toggle);
        self.refresh_view();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.criteria.clear();
        self.district_cursor = None;
        self.refresh_view();
    }

    /// Step through "all districts" followed by each district in catalog order.
    pub(crate) fn cycle_district(&mut self, forward: bool) {
        let count = DISTRICTS.len();
        self.district_cursor = match (self.district_cursor, forward) {
            (None, true) => Some(0),
            (None, false) => count.checked_sub(1),
            (Some(idx), true) if idx + 1 < count => Some(idx + 1),
            (Some(idx), false) if idx > 0 => Some(idx - 1),
            (Some(_), _) => None,
        };

        let district = self
            .district_cursor
            .and_then(|idx| DISTRICTS.get(idx))
            .map(|region| region.name);
        self.criteria.set_district(district);
        self.refresh_view();
    }

    pub(crate) fn move_selection(&mut self, down: bool) {
        if down {
            if self.list_index + 1 < self.view.len() {
                self.list_index += 1;
            }
        } else {
            self.list_index = self.list_index.saturating_sub(1);
        }
    }

    pub(crate) fn selected(&self) -> Option<&Playground> {
        self.view.get(self.list_index)
    }

    pub(crate) fn total(&self) -> usize {
        self.snapshot.as_ref().map_or(0, Snapshot::len)
    }
}
