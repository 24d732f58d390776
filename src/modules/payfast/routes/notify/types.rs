pub mod request {
    use crate::{modules::payfast::fields::FieldList, utils::name::full_name};

    pub const COMPLETE: &str = "COMPLETE";

    /// A decoded ITN body. Nothing in it is trusted until the signature
    /// has been checked.
    pub struct Payload {
        pub fields: FieldList,
    }

    impl Payload {
        pub fn payment_status(&self) -> Option<&str> {
            self.fields.get("payment_status")
        }

        pub fn is_complete(&self) -> bool {
            self.payment_status() == Some(COMPLETE)
        }

        pub fn email_address(&self) -> Option<&str> {
            self.fields.get_non_empty("email_address")
        }

        pub fn amount(&self) -> Option<&str> {
            self.fields
                .get_non_empty("amount_gross")
                .or_else(|| self.fields.get_non_empty("amount"))
        }

        pub fn customer_name(&self) -> Option<String> {
            full_name(
                self.fields.get("name_first"),
                self.fields.get("name_last"),
            )
        }

        pub fn payment_id(&self) -> Option<&str> {
            self.fields
                .get_non_empty("pf_payment_id")
                .or_else(|| self.fields.get_non_empty("m_payment_id"))
        }
    }
}

pub mod response {
    use crate::modules::notification;
    use axum::{http::StatusCode, response::IntoResponse};

    /// What happened to a notification. Every variant is acknowledged.
    #[derive(Debug, PartialEq, Eq)]
    pub enum Outcome {
        SignatureMismatch,
        Ignored { status: String },
        MissingContact,
        MailNotConfigured,
        Sent { email_address: String },
        SendFailed(notification::service::Error),
    }

    impl Outcome {
        pub fn log(&self) {
            match self {
                Self::SignatureMismatch => tracing::error!("ITN: Invalid PayFast signature"),
                Self::Ignored { status } => {
                    tracing::debug!("ITN: Ignoring notification with status {:?}", status)
                }
                Self::MissingContact => {
                    tracing::warn!("ITN: Complete payment without an email address")
                }
                Self::MailNotConfigured => {
                    tracing::error!("ITN: EMAIL_USER or EMAIL_PASS not set")
                }
                Self::Sent { email_address } => {
                    tracing::info!("ITN: Order confirmation sent to {}", email_address)
                }
                Self::SendFailed(err) => tracing::error!("ITN: Email send failed: {}", err),
            }
        }
    }

    /// The empty 200 that stops the gateway from redelivering.
    pub struct Acknowledged;

    impl From<Outcome> for Acknowledged {
        fn from(_: Outcome) -> Self {
            Self
        }
    }

    impl IntoResponse for Acknowledged {
        fn into_response(self) -> axum::response::Response {
            StatusCode::OK.into_response()
        }
    }
}
