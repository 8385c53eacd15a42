use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new hero or villain
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be between 3 and 50 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub other_name: Option<String>,

    #[validate(range(min = 1, message = "Level must be a positive integer"))]
    pub level: i32,

    #[validate(length(min = 1, max = 500, message = "Picture is required"))]
    pub picture: String,

    pub powers: Option<String>,
}

/// Request payload for updating an existing hero or villain
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    pub other_name: Option<String>,

    #[validate(range(min = 1))]
    pub level: Option<i32>,

    #[validate(length(min = 1, max = 500))]
    pub picture: Option<String>,

    pub powers: Option<String>,
}
