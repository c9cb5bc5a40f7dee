//! API response helpers
//!
//! Every response is wrapped in the same envelope: `{"status": ..., "message": ...}`, extended
//! with the data of the specific interaction

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

/// Hold data for a successful API interaction
pub struct Success<V>
where
    V: Serialize,
{
    status_code: StatusCode,
    message: &'static str,
    data: Option<V>,
}

impl<V> Success<V>
where
    V: Serialize,
{
    pub fn ok(message: &'static str) -> Self {
        Self {
            status_code: StatusCode::OK,
            message,
            data: None,
        }
    }

    pub fn created(message: &'static str, data: V) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            message,
            data: Some(data),
        }
    }
}

#[derive(Serialize)]
struct SuccessWrapper<D>
where
    D: Serialize,
{
    status: &'static str,
    message: &'static str,
    #[serde(flatten)]
    data: Option<D>,
}

impl<V> IntoResponse for Success<V>
where
    V: Serialize,
{
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(SuccessWrapper {
                status: "success",
                message: self.message,
                data: self.data,
            }),
        )
            .into_response()
    }
}

/// Hold data for a failed API interaction
#[derive(Debug)]
pub struct Error {
    status_code: StatusCode,
    message: String,
    description: Option<String>,
}

impl Error {
    pub fn bad_request<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            description: None,
        }
    }

    pub fn not_found<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::NOT_FOUND,
            message: message.to_string(),
            description: None,
        }
    }

    pub fn method_not_allowed<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::METHOD_NOT_ALLOWED,
            message: message.to_string(),
            description: None,
        }
    }

    pub fn internal_server_error<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description<M>(self, description: M) -> Self
    where
        M: ToString,
    {
        Self {
            description: Some(description.to_string()),
            ..self
        }
    }
}

#[derive(Serialize)]
struct ErrorWrapper {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(ErrorWrapper {
                status: "error",
                message: self.message,
                description: self.description,
            }),
        )
            .into_response()
    }
}
