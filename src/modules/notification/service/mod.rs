pub mod email;
mod templates;

use crate::{modules::reservation::types::Reservation, types::Context};
use std::fmt;
use std::sync::Arc;

pub mod types {
    use super::Reservation;

    #[derive(Clone, Debug)]
    pub struct OrderConfirmed {
        pub email_address: String,
        pub customer_name: Option<String>,
        pub amount: Option<String>,
    }

    #[derive(Clone, Debug)]
    pub struct ReservationReceived {
        pub recipient: String,
        pub reservation: Reservation,
    }

    #[derive(Clone, Debug)]
    pub struct ReservationConfirmed {
        pub email_address: String,
        pub reservation: Reservation,
    }
}

#[derive(Clone, Debug)]
pub enum Notification {
    OrderConfirmed(types::OrderConfirmed),
    ReservationReceived(types::ReservationReceived),
    ReservationConfirmed(types::ReservationConfirmed),
}

impl Notification {
    pub fn order_confirmed(
        email_address: String,
        customer_name: Option<String>,
        amount: Option<String>,
    ) -> Self {
        Notification::OrderConfirmed(types::OrderConfirmed {
            email_address,
            customer_name,
            amount,
        })
    }

    pub fn reservation_received(recipient: String, reservation: Reservation) -> Self {
        Notification::ReservationReceived(types::ReservationReceived {
            recipient,
            reservation,
        })
    }

    pub fn reservation_confirmed(email_address: String, reservation: Reservation) -> Self {
        Notification::ReservationConfirmed(types::ReservationConfirmed {
            email_address,
            reservation,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotConfigured,
    InvalidAddress(String),
    InvalidTransport,
    NotSent,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "mail transport is not configured"),
            Self::InvalidAddress(address) => write!(f, "invalid email address: {}", address),
            Self::InvalidTransport => write!(f, "invalid mail transport"),
            Self::NotSent => write!(f, "email was not sent"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    email::send(ctx, notification).await
}
