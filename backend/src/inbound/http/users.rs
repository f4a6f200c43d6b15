//! Users API handlers.
//!
//! ```text
//! GET    /api/users/{id}
//! POST   /api/users {"name":"Alice","age":"30"}
//! DELETE /api/users/{id}
//! ```

use actix_web::{delete, get, post, web};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Success;
use crate::inbound::http::schemas::{FailureEnvelopeSchema, UserEnvelopeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_user_id, require_fields};

/// Request body for `POST /api/users`.
///
/// Both fields are optional at the type level so that an absent field is a
/// 400 envelope rather than an extractor error. The body must be a JSON
/// object; other keys are ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(from = "Map<String, Value>")]
pub struct CreateUserRequest {
    /// Letters and spaces only. Non-string values are checked through their
    /// JSON text.
    #[schema(value_type = String, example = "Alice")]
    pub name: Option<Value>,
    /// A digit string or a non-negative integer.
    #[schema(value_type = Object, example = "30")]
    pub age: Option<Value>,
}

impl From<Map<String, Value>> for CreateUserRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            name: body.remove("name"),
            age: body.remove("age"),
        }
    }
}

/// Fetch a single user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Positive integer user identifier")),
    responses(
        (status = 200, description = "User found", body = UserEnvelopeSchema),
        (status = 404, description = "Not found", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Success<User>>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(Success::new(user)))
}

/// Create a user.
///
/// Checks run in order: required fields (400), format rules (422), name
/// uniqueness (409). A failed save is not reported to the caller.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserEnvelopeSchema),
        (status = 400, description = "Missing fields or malformed body", body = FailureEnvelopeSchema),
        (status = 409, description = "Name already taken", body = FailureEnvelopeSchema),
        (status = 422, description = "Validation failed", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<Success<User>>> {
    let CreateUserRequest { name, age } = payload.into_inner();
    let candidate = require_fields(name, age)?;
    let user = state.users_command.create_user(candidate).await?;
    Ok(web::Json(Success::new(user)))
}

/// Delete a user and return the removed record.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Positive integer user identifier")),
    responses(
        (status = 200, description = "User removed", body = UserEnvelopeSchema),
        (status = 404, description = "Not found", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Success<User>>> {
    let id = parse_user_id(&path.into_inner())?;
    let removed = state.users_command.delete_user(id).await?;
    Ok(web::Json(Success::new(removed)))
}
