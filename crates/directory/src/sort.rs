use std::cmp::Ordering;

use model::{location::Location, WithDistance};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Name,
    Distance,
}

/// Annotates every location with its distance from the reference point,
/// keeping the input order.
pub fn annotate_with_distance(
    locations: &[Location],
    latitude: f64,
    longitude: f64,
) -> Vec<WithDistance<Location>> {
    locations
        .iter()
        .cloned()
        .map(|location| location.with_distance_to(latitude, longitude))
        .collect()
}

/// Distance-annotated copy of the input, ascending by distance from the
/// reference point. The input slice is never mutated, and the sort is
/// stable: records at the exact same distance keep their relative order,
/// so repeated renders of unchanged input cannot make tied entries jump.
pub fn sort_by_distance(
    locations: &[Location],
    latitude: f64,
    longitude: f64,
) -> Vec<WithDistance<Location>> {
    let mut annotated = annotate_with_distance(locations, latitude, longitude);
    annotated.sort_by(|a, b| {
        a.distance_mi
            .partial_cmp(&b.distance_mi)
            .unwrap_or(Ordering::Equal)
    });
    annotated
}
