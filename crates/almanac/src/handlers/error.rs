use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use almanac_core::calendar::EventError;
use almanac_core::storage::{repository_error_to_status_code, DateRangeError, RepositoryError};

use crate::service::ServiceError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let repo_error = self.0.downcast_ref::<RepositoryError>().or_else(|| {
            match self.0.downcast_ref::<ServiceError>() {
                Some(ServiceError::Repository(err)) => Some(err),
                _ => None,
            }
        });

        if let Some(repo_error) = repo_error {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.is::<DateRangeError>()
            || self.0.is::<EventError>()
            || matches!(
                self.0.downcast_ref::<ServiceError>(),
                Some(ServiceError::InvalidRange(_))
            )
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
