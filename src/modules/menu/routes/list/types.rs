pub mod response {
    use crate::utils::database::{self, Document};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Menu(Vec<(String, Document)>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menu(items) => (
                    StatusCode::OK,
                    Json(json!({ "menu": database::keyed_by_id(items) })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchMenu(database::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchMenu(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
