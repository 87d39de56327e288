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
        OrderPlaced(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderPlaced(order_id) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Order placed successfully!",
                        "order_id": order_id
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingKey(&'static str),
        InvalidBody(String),
        FailedToPlaceOrder(database::Error),
    }

    // every failure, including an absent key, is reported as a server error
    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let message = match self {
                Self::MissingKey(key) => format!("missing key '{}'", key),
                Self::InvalidBody(message) => message,
                Self::FailedToPlaceOrder(err) => err.to_string(),
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
