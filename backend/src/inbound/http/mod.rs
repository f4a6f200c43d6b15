//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// The `/api` scope with the users endpoints and JSON body handling.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .service(users::get_user)
        .service(users::create_user)
        .service(users::delete_user)
}
