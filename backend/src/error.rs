use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::{ErrorResponse, UnknownLabel};

use crate::inference::InferenceError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no image file in upload")]
    MissingFile,
    #[error("unsupported upload type {0:?}, expected .jpg, .jpeg or .png")]
    UnsupportedMediaType(String),
    #[error("upload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),
    #[error("inference worker failed")]
    Blocking,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnknownLabel(_) => StatusCode::NOT_FOUND,
            ApiError::Inference(InferenceError::UnsupportedFormat) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Inference(InferenceError::Decode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Inference(_) | ApiError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
