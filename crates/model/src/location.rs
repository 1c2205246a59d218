use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::{
    geo::haversine_distance,
    id::{HasId, Id},
};

use crate::{program::AgeGroup, ExampleData, WithDistance};

/// One childcare center. Static configuration, loaded once at startup and
/// never mutated afterwards.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub slug: Id<Location>,
    pub name: String,
    pub label: Option<String>,
    pub short_name: Option<String>,
    pub state: String,
    pub city: String,
    pub neighborhood: Option<String>,
    pub full_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub coming_soon: Option<bool>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hours: Option<String>,
    pub age_groups: Option<Vec<AgeGroup>>,
    pub accreditation: Option<Vec<String>>,
}

impl Location {
    pub fn with_distance_to(self, latitude: f64, longitude: f64) -> WithDistance<Location> {
        let distance =
            haversine_distance(latitude, longitude, self.latitude, self.longitude);
        WithDistance::new(distance, self)
    }

    /// Case-insensitive substring match over city, name, state and address.
    /// `query` must already be lowercased and trimmed; an empty query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.city.to_lowercase().contains(query)
            || self.name.to_lowercase().contains(query)
            || self.state.to_lowercase().contains(query)
            || self.full_address.to_lowercase().contains(query)
    }
}

impl HasId for Location {
    type IdType = String;
}

impl ExampleData for Location {
    fn example_data() -> Self {
        Location {
            slug: Id::from_name("Arvada"),
            name: "Lionheart Children's Academy – Arvada".to_owned(),
            label: Some("Arvada, CO".to_owned()),
            short_name: Some("Arvada".to_owned()),
            state: "Colorado".to_owned(),
            city: "Arvada".to_owned(),
            neighborhood: None,
            full_address: "8210 Kipling St, Arvada, CO 80005".to_owned(),
            latitude: 39.8403,
            longitude: -105.1264,
            coming_soon: None,
            phone: Some("(303) 555-0100".to_owned()),
            email: Some("arvada@lionheartacademy.com".to_owned()),
            hours: Some("Monday - Friday, 7:00 AM - 6:00 PM".to_owned()),
            age_groups: Some(vec![
                AgeGroup::Infants,
                AgeGroup::Toddlers,
                AgeGroup::Preschool,
                AgeGroup::PreK,
                AgeGroup::Kindergarten,
            ]),
            accreditation: Some(vec![
                "State Licensed".to_owned(),
                "NAEYC Accredited".to_owned(),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_any_field() {
        let location = Location::example_data();
        assert!(location.matches_query("arvada"));
        assert!(location.matches_query("lionheart"));
        assert!(location.matches_query("colorado"));
        assert!(location.matches_query("kipling"));
        assert!(!location.matches_query("mckinney"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(Location::example_data().matches_query(""));
    }

    #[test]
    fn distance_annotation_is_non_negative() {
        let annotated = Location::example_data().with_distance_to(32.78, -96.80);
        assert!(annotated.distance_mi > 0.0);
    }
}
