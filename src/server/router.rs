//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/downloads/{id}` - Download a prepared file
/// - `GET /api/downloads/{id}/exists` - Check whether a prepared file is available
/// - `POST /api/groups/{group_id}/role_list` - Create roles for several people
/// - `PUT /api/groups/{group_id}/role_list` - Move roles of several people
/// - `DELETE /api/groups/{group_id}/role_list` - Delete roles of several people
/// - `GET /api/groups/{group_id}/role_list/move` - Summary of a pending move
/// - `GET /api/groups/{group_id}/role_list/deletable` - Role counts per type
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, downloads });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster API"), tags(
        (name = controller::download::DOWNLOAD_TAG, description = "Async download API routes"),
        (name = controller::role_list::ROLE_LIST_TAG, description = "Bulk role management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::download::show))
        .routes(routes!(controller::download::exists))
        .routes(routes!(
            controller::role_list::create,
            controller::role_list::update,
            controller::role_list::destroy
        ))
        .routes(routes!(controller::role_list::move_roles))
        .routes(routes!(controller::role_list::deletable))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
