use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new venue
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVenueRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,

    #[validate(range(min = 0, message = "Capacity cannot be negative"))]
    pub capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_capacity_is_rejected() {
        let req = CreateVenueRequest {
            name: "Main Hall".to_string(),
            location: "Paris".to_string(),
            capacity: -1,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("capacity"));
    }

    #[test]
    fn zero_capacity_is_allowed() {
        let req = CreateVenueRequest {
            name: "Open Field".to_string(),
            location: "Lyon".to_string(),
            capacity: 0,
        };

        assert!(req.validate().is_ok());
    }
}
