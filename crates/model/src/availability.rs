use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Waitlist,
}

/// Open-spot standing for one program at one center. Mock data only, there
/// is no enrollment system behind it.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramAvailability {
    pub program: String,
    pub age_range: String,
    pub status: AvailabilityStatus,
    pub spots_available: Option<u32>,
    pub waitlist_count: Option<u32>,
}

impl ProgramAvailability {
    pub fn available(program: &str, age_range: &str, spots: u32) -> Self {
        Self {
            program: program.to_owned(),
            age_range: age_range.to_owned(),
            status: AvailabilityStatus::Available,
            spots_available: Some(spots),
            waitlist_count: None,
        }
    }

    pub fn limited(program: &str, age_range: &str, spots: u32) -> Self {
        Self {
            program: program.to_owned(),
            age_range: age_range.to_owned(),
            status: AvailabilityStatus::Limited,
            spots_available: Some(spots),
            waitlist_count: None,
        }
    }

    pub fn waitlisted(program: &str, age_range: &str, waiting: u32) -> Self {
        Self {
            program: program.to_owned(),
            age_range: age_range.to_owned(),
            status: AvailabilityStatus::Waitlist,
            spots_available: None,
            waitlist_count: Some(waiting),
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationAvailability {
    pub location: String,
    pub programs: Vec<ProgramAvailability>,
    pub last_updated: DateTime<Utc>,
}
