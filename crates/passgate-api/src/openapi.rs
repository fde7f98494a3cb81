//! OpenAPI documentation

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI document for the passgate API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::register_handler,
        crate::handlers::auth::login_handler,
        crate::handlers::protected::profile_handler,
        crate::handlers::protected::admin_handler,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        crate::auth::service::RegisterRequest,
        crate::auth::service::LoginRequest,
        crate::auth::models::CreatedUser,
        crate::auth::models::UserRole,
        crate::handlers::auth::RegisterResponse,
        crate::handlers::auth::LoginResponse,
        crate::handlers::protected::GreetingResponse,
        crate::handlers::health::HealthResponse,
        crate::error::ApiError,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "protected", description = "Token-gated endpoints"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the generated document
pub struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
