use std::path::Path;

use indexmap::IndexMap;
use itertools::Itertools;
use model::location::Location;
use utility::id::Id;

use crate::{DirectoryError, DirectoryResult};

const BUILTIN_LOCATIONS: &str = include_str!("../resources/locations.json");

/// The static list of centers. Loaded once at startup, immutable afterwards.
///
/// Keyed by slug in an `IndexMap` so the file order of the records is
/// preserved; stable input order is what makes tied distance sorts
/// reproducible further down the pipeline.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    locations: IndexMap<Id<Location>, Location>,
}

impl LocationCatalog {
    /// The location list shipped with the binary.
    pub fn builtin() -> DirectoryResult<Self> {
        Self::from_json(BUILTIN_LOCATIONS)
    }

    pub fn from_json(json: &str) -> DirectoryResult<Self> {
        let records: Vec<Location> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_records(records: Vec<Location>) -> DirectoryResult<Self> {
        let mut locations = IndexMap::with_capacity(records.len());
        for record in records {
            if !(-90.0..=90.0).contains(&record.latitude)
                || !(-180.0..=180.0).contains(&record.longitude)
            {
                return Err(DirectoryError::InvalidCoordinate {
                    slug: record.slug.raw(),
                    latitude: record.latitude,
                    longitude: record.longitude,
                });
            }
            if locations.contains_key(&record.slug) {
                return Err(DirectoryError::DuplicateSlug(record.slug.raw()));
            }
            locations.insert(record.slug.clone(), record);
        }
        log::info!("location catalog loaded with {} centers", locations.len());
        Ok(Self { locations })
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn get(&self, slug: &Id<Location>) -> DirectoryResult<&Location> {
        self.locations.get(slug).ok_or(DirectoryError::NotFound)
    }

    pub fn contains(&self, slug: &Id<Location>) -> bool {
        self.locations.contains_key(slug)
    }

    /// Distinct states covered by the catalog, sorted, for the filter
    /// dropdown.
    pub fn states(&self) -> Vec<String> {
        self.locations
            .values()
            .map(|location| location.state.clone())
            .unique()
            .sorted()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = LocationCatalog::builtin().unwrap();
        assert!(catalog.len() > 20);
        assert!(catalog.contains(&Id::new("arvada".to_owned())));
        assert!(catalog.contains(&Id::new("mckinney".to_owned())));
    }

    #[test]
    fn states_are_distinct_and_sorted() {
        let catalog = LocationCatalog::builtin().unwrap();
        let states = catalog.states();
        assert_eq!(
            states,
            vec!["Colorado", "Indiana", "Ohio", "Tennessee", "Texas"]
        );
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = LocationCatalog::builtin().unwrap();
        let result = catalog.get(&Id::new("atlantis".to_owned()));
        assert!(matches!(result, Err(DirectoryError::NotFound)));
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let json = r#"[{
            "slug": "nowhere",
            "name": "Nowhere",
            "state": "Texas",
            "city": "Nowhere",
            "fullAddress": "1 Nowhere Rd",
            "latitude": 123.0,
            "longitude": 0.0
        }]"#;
        let result = LocationCatalog::from_json(json);
        assert!(matches!(
            result,
            Err(DirectoryError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let json = r#"[
            {"slug": "a", "name": "A", "state": "Texas", "city": "Plano",
             "fullAddress": "1 A St", "latitude": 33.0, "longitude": -96.0},
            {"slug": "a", "name": "A again", "state": "Texas", "city": "Plano",
             "fullAddress": "2 A St", "latitude": 33.0, "longitude": -96.0}
        ]"#;
        let result = LocationCatalog::from_json(json);
        assert!(matches!(result, Err(DirectoryError::DuplicateSlug(_))));
    }
}
