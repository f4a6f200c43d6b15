//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the schema
//! wrappers from [`crate::inbound::http::schemas`], which document the
//! envelopes without coupling domain types to utoipa.
//!
//! The generated document backs Swagger UI in debug builds and is exported
//! by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{FailureEnvelopeSchema, UserEnvelopeSchema, UserSchema};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Create, fetch and delete users stored in a JSON file."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserEnvelopeSchema,
        FailureEnvelopeSchema,
        CreateUserRequest
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
