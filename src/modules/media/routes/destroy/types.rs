pub mod request {
    pub struct Payload {
        pub filename: String,
    }
}

pub mod response {
    use crate::utils::storage;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ImageDeleted(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageDeleted(filename) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": format!("Image '{}' deleted successfully!", filename)
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ImageNotFound(String),
        FailedToDeleteImage(storage::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageNotFound(filename) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Image '{}' not found.", filename) })),
                )
                    .into_response(),
                Self::FailedToDeleteImage(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
