use crate::store::StoreError;
use axum::http::{StatusCode, header};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub challenge: Option<&'static str>,
}

impl AppError {
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
            challenge: Some("Basic"),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
            challenge: None,
        }
    }

    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
            challenge: None,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.challenge {
            Some(scheme) => {
                (self.status, [(header::WWW_AUTHENTICATE, scheme)], self.message).into_response()
            }
            None => (self.status, self.message).into_response(),
        }
    }
}
