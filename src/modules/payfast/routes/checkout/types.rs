pub mod request {
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        pub name_first: String,
        #[serde(default)]
        pub name_last: String,
        #[validate(email)]
        pub email_address: String,
        pub amount: BigDecimal,
        #[validate(length(min = 1))]
        pub item_name: String,
        pub m_payment_id: Option<String>,
    }
}

pub mod response {
    use crate::modules::payfast::payment::SignedPaymentForm;
    use axum::{
        extract::Json,
        http::StatusCode,
        response::{Html, IntoResponse},
    };
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        PaymentForm(SignedPaymentForm),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentForm(form) => Html(form.render()).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidAmount,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
                }
                Self::InvalidAmount => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Amount must be greater than zero" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
