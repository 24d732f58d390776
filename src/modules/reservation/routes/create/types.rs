pub mod request {
    pub type Payload = crate::modules::reservation::types::Reservation;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reserved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reserved => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidJson,
        MissingEmail,
        EmailNotConfigured,
        FailedToSend,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON").into_response(),
                Self::MissingEmail => {
                    (StatusCode::BAD_REQUEST, "Missing formData or email").into_response()
                }
                Self::EmailNotConfigured => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Email not configured").into_response()
                }
                Self::FailedToSend => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send reservation")
                        .into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
