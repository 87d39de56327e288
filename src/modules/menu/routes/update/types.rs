pub mod request {
    use serde_json::Value;

    pub struct Payload {
        pub id: String,
        pub body: Value,
    }
}

pub mod response {
    use crate::utils::database;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MenuItemUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Menu item updated successfully!" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidBody(String),
        FailedToUpdateMenuItem(database::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let message = match self {
                Self::InvalidBody(message) => message,
                Self::FailedToUpdateMenuItem(err) => err.to_string(),
            };

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
