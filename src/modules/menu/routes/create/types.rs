pub mod request {
    use serde_json::Value;

    pub struct Payload {
        pub body: Value,
    }
}

pub mod response {
    use crate::utils::database;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MenuItemCreated(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemCreated(name) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": format!("Menu item '{}' added successfully!", name) })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NameRequired,
        MenuItemExists(String),
        InvalidBody(String),
        FailedToCreateMenuItem(database::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameRequired => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Menu item name is required." })),
                )
                    .into_response(),
                Self::MenuItemExists(name) => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": format!("Menu item '{}' already exists.", name) })),
                )
                    .into_response(),
                Self::InvalidBody(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
                Self::FailedToCreateMenuItem(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
