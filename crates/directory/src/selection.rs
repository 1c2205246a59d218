use model::location::Location;
use utility::id::Id;

use crate::{
    catalog::LocationCatalog,
    filter::{LocationFilter, StateFilter},
    geolocate::{Coordinate, GeolocationError},
    sort::{sort_by_distance, SortOrder},
};

/// Lifecycle of the one asynchronous boundary in the directory: acquiring
/// the user's position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PositionState {
    #[default]
    Unknown,
    Requested,
    Available(Coordinate),
    Failed(GeolocationError),
}

impl PositionState {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            PositionState::Available(coordinate) => Some(*coordinate),
            _ => None,
        }
    }
}

/// Everything the directory page tracks, independent of any UI framework.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub filter: LocationFilter,
    pub sort: SortOrder,
    pub position: PositionState,
    pub selected: Option<Id<Location>>,
}

#[derive(Debug, Clone)]
pub enum DirectoryEvent {
    QueryChanged(String),
    StateFilterChanged(StateFilter),
    SortChanged(SortOrder),
    LocationSelected(Id<Location>),
    PositionRequested,
    PositionResolved(Coordinate),
    PositionFailed(GeolocationError),
}

impl DirectoryState {
    /// Initial state: no filters, name ordering, first catalog entry of the
    /// default view selected.
    pub fn new(catalog: &LocationCatalog) -> Self {
        let mut state = Self::default();
        state.repair_selection(catalog);
        state
    }

    /// The filtered, ordered view this state describes. Distance ordering
    /// requires a resolved position; without one the view falls back to the
    /// default name ordering.
    pub fn visible(&self, catalog: &LocationCatalog) -> Vec<Location> {
        let filtered = self.filter.apply(catalog.locations());
        match (self.sort, self.position.coordinate()) {
            (SortOrder::Distance, Some(position)) => {
                sort_by_distance(&filtered, position.latitude, position.longitude)
                    .into_iter()
                    .map(|entry| entry.content)
                    .collect()
            }
            _ => filtered,
        }
    }

    /// Pure state transition. Consumes the current state and produces the
    /// next one; the catalog is the only context needed, and it is
    /// immutable.
    pub fn reduce(mut self, event: DirectoryEvent, catalog: &LocationCatalog) -> Self {
        match event {
            DirectoryEvent::QueryChanged(query) => {
                self.filter.query = query;
                self.repair_selection(catalog);
            }
            DirectoryEvent::StateFilterChanged(state_filter) => {
                self.filter.state = state_filter;
                self.repair_selection(catalog);
            }
            DirectoryEvent::SortChanged(sort) => {
                self.sort = sort;
                self.repair_selection(catalog);
            }
            DirectoryEvent::LocationSelected(slug) => {
                self.selected = Some(slug);
                self.repair_selection(catalog);
            }
            DirectoryEvent::PositionRequested => {
                self.position = PositionState::Requested;
            }
            // Position outcomes only apply while a request is outstanding.
            // A late result after the user moved on is dropped here instead
            // of through a cancellation token.
            DirectoryEvent::PositionResolved(coordinate) => {
                if self.position == PositionState::Requested {
                    self.position = PositionState::Available(coordinate);
                    self.repair_selection(catalog);
                }
            }
            DirectoryEvent::PositionFailed(why) => {
                if self.position == PositionState::Requested {
                    self.position = PositionState::Failed(why);
                    self.repair_selection(catalog);
                }
            }
        }
        self
    }

    /// Selection is a function of (current selection, filtered set): kept
    /// while still visible, moved to the first visible record otherwise,
    /// cleared when nothing is visible.
    fn repair_selection(&mut self, catalog: &LocationCatalog) {
        let visible = self.visible(catalog);
        self.selected = match self.selected.take() {
            Some(current)
                if visible.iter().any(|location| location.slug == current) =>
            {
                Some(current)
            }
            _ => visible.first().map(|location| location.slug.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LocationCatalog {
        LocationCatalog::builtin().unwrap()
    }

    fn slug(raw: &str) -> Id<Location> {
        Id::new(raw.to_owned())
    }

    #[test]
    fn initial_selection_is_first_of_default_view() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog);
        // default order is state-then-city; Arvada, Colorado leads
        assert_eq!(state.selected, Some(slug("arvada")));
    }

    #[test]
    fn surviving_selection_is_kept() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog)
            .reduce(DirectoryEvent::LocationSelected(slug("mckinney")), &catalog)
            .reduce(
                DirectoryEvent::StateFilterChanged(StateFilter::Only(
                    "Texas".to_owned(),
                )),
                &catalog,
            );
        assert_eq!(state.selected, Some(slug("mckinney")));
    }

    #[test]
    fn filtered_out_selection_moves_to_first_visible() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog)
            .reduce(DirectoryEvent::LocationSelected(slug("arvada")), &catalog)
            .reduce(
                DirectoryEvent::StateFilterChanged(StateFilter::Only(
                    "Ohio".to_owned(),
                )),
                &catalog,
            );
        let first_visible = state.visible(&catalog)[0].slug.clone();
        assert_eq!(state.selected, Some(first_visible));
        assert_eq!(state.selected, Some(slug("harrison")));
    }

    #[test]
    fn empty_result_clears_selection() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog).reduce(
            DirectoryEvent::QueryChanged("no such place".to_owned()),
            &catalog,
        );
        assert!(state.visible(&catalog).is_empty());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn selection_returns_when_filter_relaxes() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog)
            .reduce(
                DirectoryEvent::QueryChanged("no such place".to_owned()),
                &catalog,
            )
            .reduce(DirectoryEvent::QueryChanged(String::new()), &catalog);
        assert_eq!(state.selected, Some(slug("arvada")));
    }

    #[test]
    fn distance_sort_without_position_falls_back_to_name_order() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog)
            .reduce(DirectoryEvent::SortChanged(SortOrder::Distance), &catalog);
        let visible = state.visible(&catalog);
        assert_eq!(visible[0].slug, slug("arvada"));
    }

    #[test]
    fn resolved_position_enables_distance_order() {
        let catalog = catalog();
        let dallas = Coordinate {
            latitude: 32.78,
            longitude: -96.80,
        };
        let state = DirectoryState::new(&catalog)
            .reduce(DirectoryEvent::SortChanged(SortOrder::Distance), &catalog)
            .reduce(DirectoryEvent::PositionRequested, &catalog)
            .reduce(DirectoryEvent::PositionResolved(dallas), &catalog);
        let visible = state.visible(&catalog);
        // Irving is the closest center to downtown Dallas in the catalog.
        assert_eq!(visible[0].slug, slug("irving"));
        let mckinney_index = visible
            .iter()
            .position(|location| location.slug == slug("mckinney"))
            .unwrap();
        let arvada_index = visible
            .iter()
            .position(|location| location.slug == slug("arvada"))
            .unwrap();
        assert!(mckinney_index < arvada_index);
    }

    #[test]
    fn late_position_result_is_ignored() {
        let catalog = catalog();
        let dallas = Coordinate {
            latitude: 32.78,
            longitude: -96.80,
        };
        // No request outstanding: the stale resolution must not apply.
        let state = DirectoryState::new(&catalog)
            .reduce(DirectoryEvent::PositionResolved(dallas), &catalog);
        assert_eq!(state.position, PositionState::Unknown);

        let state = state
            .reduce(DirectoryEvent::PositionRequested, &catalog)
            .reduce(
                DirectoryEvent::PositionFailed(GeolocationError::TimedOut),
                &catalog,
            )
            .reduce(DirectoryEvent::PositionResolved(dallas), &catalog);
        assert_eq!(
            state.position,
            PositionState::Failed(GeolocationError::TimedOut)
        );
    }

    #[test]
    fn failure_keeps_directory_usable() {
        let catalog = catalog();
        let state = DirectoryState::new(&catalog)
            .reduce(DirectoryEvent::SortChanged(SortOrder::Distance), &catalog)
            .reduce(DirectoryEvent::PositionRequested, &catalog)
            .reduce(
                DirectoryEvent::PositionFailed(GeolocationError::Denied),
                &catalog,
            );
        let visible = state.visible(&catalog);
        assert_eq!(visible.len(), catalog.len());
        assert_eq!(state.selected, Some(slug("arvada")));
    }
}
