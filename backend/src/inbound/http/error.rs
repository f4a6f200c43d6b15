//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into failure envelopes and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, info};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::envelope::Failure;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.code().as_str(), error = %self, "request failed");
        } else {
            info!(code = self.code().as_str(), error = %self, "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(Failure::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[rstest]
    #[case(Error::invalid_request("all fields are required"), StatusCode::BAD_REQUEST)]
    #[case(Error::validation(["bad"]), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(Error::not_found("user not found"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("taken"), StatusCode::CONFLICT)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
        assert_eq!(ResponseError::status_code(&err), status);
    }

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        serde_json::from_slice(&bytes).expect("envelope is JSON")
    }

    #[actix_web::test]
    async fn internal_errors_keep_their_message() {
        let response = ResponseError::error_response(&Error::internal("disk on fire"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            json!({"success": false, "message": "disk on fire"})
        );
    }

    #[actix_web::test]
    async fn validation_errors_render_error_list() {
        let error = Error::validation([
            "name must contain only letters and spaces",
            "age must be a positive integer",
        ]);
        let response = ResponseError::error_response(&error);
        assert_eq!(
            body_of(response).await,
            json!({
                "success": false,
                "errors": [
                    "name must contain only letters and spaces",
                    "age must be a positive integer"
                ]
            })
        );
    }

    #[actix_web::test]
    async fn trace_id_is_echoed_as_header() {
        let error = Error::not_found("user not found").with_trace_id(TRACE_ID);
        let response = ResponseError::error_response(&error);
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace-id header is set")
            .to_str()
            .expect("header is ascii");
        assert_eq!(header, TRACE_ID);
    }

    #[actix_web::test]
    async fn no_trace_id_means_no_header() {
        let response = ResponseError::error_response(&Error::conflict("taken"));
        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    }
}
