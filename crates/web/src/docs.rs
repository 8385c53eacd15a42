use utoipa::OpenApi;

use crate::features::{directory, fights, statistics};

#[derive(OpenApi)]
#[openapi(
    paths(
        fights::handlers::get_random_fighters,
        fights::handlers::get_all_fights,
        fights::handlers::get_fight,
        fights::handlers::create_fight,
        fights::handlers::hello,
        statistics::handlers::get_top_winners,
    ),
    components(
        schemas(
            storage::models::Fight,
            storage::models::Fighter,
            storage::models::Fighters,
            storage::models::Score,
        )
    ),
    tags(
        (name = "fights", description = "Fight endpoints"),
        (name = "statistics", description = "Fight statistics"),
    )
)]
pub struct FightApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        directory::handlers::get_random_character,
        directory::handlers::list_characters,
        directory::handlers::get_character,
        directory::handlers::create_character,
        directory::handlers::update_character,
        directory::handlers::delete_character,
        directory::handlers::hello,
    ),
    components(
        schemas(
            storage::dto::character::CreateCharacterRequest,
            storage::dto::character::UpdateCharacterRequest,
            storage::models::Character,
            storage::models::FighterKind,
        )
    ),
    tags(
        (name = "directory", description = "Hero and villain directories"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct DirectoryApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
