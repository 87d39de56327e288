pub mod request {
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Payload {
        #[form_data(limit = "10MiB")]
        pub file: Option<FieldData<NamedTempFile>>,
    }
}

pub mod response {
    use crate::utils::storage;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use axum_typed_multipart::TypedMultipartError;
    use serde_json::json;

    pub enum Success {
        ImageUploaded(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageUploaded(image_url) => {
                    (StatusCode::OK, Json(json!({ "image_url": image_url }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        NoFilePart,
        NoSelectedFile,
        FileTooLarge,
        InvalidMultipart(String),
        FailedToReadFile(std::io::Error),
        FailedToUploadImage(storage::Error),
    }

    impl From<TypedMultipartError> for Error {
        fn from(err: TypedMultipartError) -> Self {
            match err {
                // not a multipart request, so there is no `file` part to speak of
                TypedMultipartError::InvalidRequest { .. }
                | TypedMultipartError::InvalidRequestBody { .. } => Self::NoFilePart,
                TypedMultipartError::FieldTooLarge { .. } => Self::FileTooLarge,
                err => {
                    tracing::error!("Failed to parse the upload form: {}", err);
                    Self::InvalidMultipart(err.to_string())
                }
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoFilePart => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "No file part in the request." })),
                )
                    .into_response(),
                Self::NoSelectedFile => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "No selected file." })),
                )
                    .into_response(),
                Self::FileTooLarge => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({ "error": "File is too large." })),
                )
                    .into_response(),
                Self::InvalidMultipart(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
                Self::FailedToReadFile(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
                Self::FailedToUploadImage(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
