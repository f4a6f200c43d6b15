//! OpenAPI schema definitions for domain types and envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Identifier assigned by the service.
    #[schema(example = 1, minimum = 1)]
    id: u64,
    /// Letters and spaces only; unique across users.
    #[schema(example = "Alice")]
    name: String,
    /// Age exactly as supplied at creation: a digit string or a number.
    #[schema(value_type = Object, example = "30")]
    age: serde_json::Value,
}

/// OpenAPI schema for a successful envelope carrying one user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// The user read, created or removed.
    message: UserSchema,
}

/// OpenAPI schema for the failure envelope.
///
/// Validation failures carry `errors`; every other failure carries
/// `message`.
#[derive(ToSchema)]
#[schema(as = FailureEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable reason.
    #[schema(example = "user not found")]
    message: Option<String>,
    /// Every validation rule the request broke, name first.
    #[schema(example = json!(["age must be a positive integer"]))]
    errors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn user_schema_lists_stored_fields() {
        assert_eq!(UserSchema::name(), "User");
        let schema_json = schema_to_json::<UserSchema>();
        for field in ["id", "name", "age"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn failure_schema_has_message_and_errors() {
        assert_eq!(FailureEnvelopeSchema::name(), "FailureEnvelope");
        let schema_json = schema_to_json::<FailureEnvelopeSchema>();
        assert!(schema_json.contains("message"));
        assert!(schema_json.contains("errors"));
    }
}
