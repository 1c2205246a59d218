use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to schedule an in-person tour of a center.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourRequest {
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub parent_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub child_name: Option<String>,
    #[validate(length(min = 1, message = "Child's age is required"))]
    pub child_age: String,
    pub start_date: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub additional_info: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    Email,
    Phone,
    Either,
}

/// General inquiry from the contact form.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
    pub contact_preference: Option<ContactPreference>,
}

/// Signup for a program's waitlist.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSignup {
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Program is required"))]
    pub program: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub parent_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub child_date_of_birth: Option<String>,
    pub desired_start_date: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour_request() -> TourRequest {
        TourRequest {
            location: "arvada".to_owned(),
            parent_name: "Jennifer M.".to_owned(),
            email: "jennifer@example.com".to_owned(),
            phone: None,
            child_name: None,
            child_age: "3".to_owned(),
            start_date: None,
            preferred_date: Some("2025-09-01".to_owned()),
            preferred_time: None,
            additional_info: None,
        }
    }

    #[test]
    fn valid_tour_request_passes() {
        assert!(tour_request().validate().is_ok());
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut request = tour_request();
        request.email = "not-an-email".to_owned();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn short_message_is_rejected() {
        let message = ContactMessage {
            name: "Robert S.".to_owned(),
            email: "robert@example.com".to_owned(),
            phone: None,
            location: None,
            subject: "Enrollment".to_owned(),
            message: "Hi".to_owned(),
            contact_preference: Some(ContactPreference::Email),
        };
        let errors = message.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }
}
