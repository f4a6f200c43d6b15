//! Structural request checks for the users endpoints.
//!
//! These run before the domain sees anything: a missing field or an
//! unparsable body is a 400, an identifier that cannot name a user is a 404.
//! Format rules (letters-only names, digit ages) live in the domain.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Age, Error, NewUser, UserId, is_blank_value};

pub(crate) const MISSING_FIELDS: &str = "all fields are required";
pub(crate) const MALFORMED_BODY: &str = "request body must be a JSON object";
pub(crate) const USER_NOT_FOUND: &str = "user not found";

/// Build a candidate from optional body fields.
///
/// A field that is absent or blank (`null`, `false`, `0`, `""`) is missing.
/// A name of any other JSON type is kept in its JSON text form, so the
/// domain's format rule reports it as a violation instead of the extractor
/// rejecting the body.
pub(crate) fn require_fields(name: Option<Value>, age: Option<Value>) -> Result<NewUser, Error> {
    let name = name.filter(|name| !is_blank_value(name)).map(name_text);
    let age = age.map(Age::new).filter(|age| !age.is_blank());
    match (name, age) {
        (Some(name), Some(age)) => Ok(NewUser::new(name, age)),
        _ => Err(Error::invalid_request(MISSING_FIELDS)),
    }
}

fn name_text(name: Value) -> String {
    match name {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Interpret a path segment as a user identifier.
///
/// The segment is read as a number, so `1.0`, `1e0` and ` 1 ` all name
/// user 1. Anything that does not come out as a positive whole number
/// cannot match a stored record and is reported like an unknown identifier.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    numeric_id(raw).ok_or_else(|| {
        debug!(raw, "path segment is not a user id");
        Error::not_found(USER_NOT_FOUND)
    })
}

// The range check keeps the cast exact.
fn numeric_id(raw: &str) -> Option<UserId> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value >= u64::MAX as f64 {
        return None;
    }
    UserId::new(value as u64).ok()
}

/// Render body extraction failures as the 400 envelope.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting unparsable request body");
    Error::invalid_request(MALFORMED_BODY).into()
}
