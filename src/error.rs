use crate::profile::ProfileError;
use crate::render::RenderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors as they leave a handler. Internal details are logged, never sent.
#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            )
                .into_response(),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> AppError {
        match err {
            ProfileError::NotFound => AppError::NotFound("User not found"),
            ProfileError::Store(err) => {
                tracing::error!("Error reading user store: {err}");
                AppError::Internal
            }
        }
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> AppError {
        tracing::error!("Error rendering page: {err}");
        AppError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::from(ProfileError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let err = ProfileError::Store(crate::store::StoreError::Io(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
