use utoipa_axum::{router::OpenApiRouter, routes};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(
            handlers::about::get_about,
            handlers::about::update_about
        ))
        .merge(photo_routes(config))
        .routes(routes!(
            handlers::project::list_projects,
            handlers::project::create_project
        ))
        .routes(routes!(
            handlers::project::update_project,
            handlers::project::delete_project
        ))
        .routes(routes!(handlers::link::list_links, handlers::link::create_link))
        .routes(routes!(handlers::link::update_link, handlers::link::delete_link))
}

fn photo_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::about::get_photo,
            handlers::about::upload_photo
        ))
        .layer(handlers::about::photo_body_limit(
            config.storage.max_avatar_size,
        ))
}
