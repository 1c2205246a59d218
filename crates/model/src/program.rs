use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The age groups a center can offer care for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Infants,
    Toddlers,
    Preschool,
    PreK,
    Kindergarten,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Infants,
        AgeGroup::Toddlers,
        AgeGroup::Preschool,
        AgeGroup::PreK,
        AgeGroup::Kindergarten,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Infants => "Infant Care",
            AgeGroup::Toddlers => "Toddlers",
            AgeGroup::Preschool => "Preschool",
            AgeGroup::PreK => "Pre-K & Kindergarten Prep",
            AgeGroup::Kindergarten => "Kindergarten",
        }
    }

    pub fn age_range(&self) -> &'static str {
        match self {
            AgeGroup::Infants => "6 weeks – 12 months",
            AgeGroup::Toddlers => "12 – 24 months",
            AgeGroup::Preschool => "2 – 4 years",
            AgeGroup::PreK => "4 – 5 years",
            AgeGroup::Kindergarten => "5 – 6 years",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AgeGroup::Infants => "infants",
            AgeGroup::Toddlers => "toddlers",
            AgeGroup::Preschool => "preschool",
            AgeGroup::PreK => "pre-k",
            AgeGroup::Kindergarten => "kindergarten",
        }
    }

    pub fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: self.slug().to_owned(),
            label: self.label().to_owned(),
            age_range: self.age_range().to_owned(),
        }
    }
}

/// Display info for one age group, as served by the program catalog route.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInfo {
    pub slug: String,
    pub label: String,
    pub age_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_kebab_case_slug() {
        let json = serde_json::to_string(&AgeGroup::PreK).unwrap();
        assert_eq!(json, "\"pre-k\"");
    }

    #[test]
    fn slug_round_trips() {
        for group in AgeGroup::ALL {
            let json = serde_json::to_string(&group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.slug()));
        }
    }
}
