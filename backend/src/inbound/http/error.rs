//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into status codes with a plain-text body
//! carrying the error message.

use actix_web::http::header::{ContentType, HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = TraceId::current();
        if status.is_server_error() {
            error!(
                code = %self.code(),
                message = self.message(),
                trace_id = ?trace_id,
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(status);
        builder.content_type(ContentType::plaintext());
        if let Some(id) = trace_id {
            if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
                builder.insert_header((HeaderName::from_static(TRACE_ID_HEADER), value));
            }
        }
        builder.body(self.message().to_owned())
    }
}
