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
    use serde_json::{json, Value};

    pub enum Success {
        OrderStatusUpdated { id: String, status: Value },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated { id, status } => {
                    let status = match status {
                        Value::String(status) => status,
                        status => status.to_string(),
                    };

                    (
                        StatusCode::OK,
                        Json(json!({
                            "message": format!("Order {} status updated to {}.", id, status)
                        })),
                    )
                        .into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingKey(&'static str),
        InvalidBody(String),
        FailedToUpdateOrderStatus(database::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let message = match self {
                Self::MissingKey(key) => format!("missing key '{}'", key),
                Self::InvalidBody(message) => message,
                Self::FailedToUpdateOrderStatus(err) => err.to_string(),
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
