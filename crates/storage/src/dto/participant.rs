use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Gender;

/// Request payload for registering a participant.
///
/// The age floor is not checked here: registration goes through the
/// eligibility validator so the rejection carries its own error kind.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Nationality must be between 1 and 100 characters"
    ))]
    pub nationality: String,

    pub age: i32,

    pub gender: Gender,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipantFilter {
    /// Only return participants of this nationality
    pub nationality: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_outside_the_closed_set_fails_to_parse() {
        let payload = r#"{"name":"A","nationality":"FR","age":20,"gender":"Unknown"}"#;
        assert!(serde_json::from_str::<CreateParticipantRequest>(payload).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let req = CreateParticipantRequest {
            name: String::new(),
            nationality: "FR".to_string(),
            age: 20,
            gender: Gender::Female,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
