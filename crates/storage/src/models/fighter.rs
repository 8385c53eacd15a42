use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Read-only snapshot of a hero or villain, as handed out by a directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Fighter {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Fighter name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(max = 500, message = "Fighter picture must be at most 500 characters"))]
    pub picture: String,

    #[validate(range(min = 1, message = "Fighter level must be a positive integer"))]
    pub level: i32,
}

impl Fighter {
    pub fn new(name: impl Into<String>, picture: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            picture: picture.into(),
            level,
        }
    }
}

fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        Err(validator::ValidationError::new("blank_name"))
    } else {
        Ok(())
    }
}

/// The two fighters of a fight. Both sides are optional on the wire so that a
/// missing side is reported as an invalid request rather than a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Fighters {
    pub hero: Option<Fighter>,
    pub villain: Option<Fighter>,
}

impl Fighters {
    pub fn new(hero: Fighter, villain: Fighter) -> Self {
        Self {
            hero: Some(hero),
            villain: Some(villain),
        }
    }
}
