use crate::{modules::payfast::payment::format_amount, utils::name::full_name};
use bigdecimal::{BigDecimal, Zero};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FormData {
    pub name_first: Option<String>,
    pub name_last: Option<String>,
    pub email_address: Option<String>,
    pub cell_number: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl FormData {
    pub fn email(&self) -> Option<&str> {
        self.email_address
            .as_deref()
            .filter(|email| !email.is_empty())
    }

    pub fn full_name(&self) -> Option<String> {
        full_name(self.name_first.as_deref(), self.name_last.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<BigDecimal>,
}

impl CartItem {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Missing or zero quantities count as one.
    pub fn quantity(&self) -> u32 {
        self.quantity.filter(|quantity| *quantity != 0).unwrap_or(1)
    }

    pub fn line_total(&self) -> BigDecimal {
        self.price.clone().unwrap_or_else(BigDecimal::zero) * BigDecimal::from(self.quantity())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Reservation {
    #[serde(rename = "formData", default)]
    pub form_data: Option<FormData>,
    #[serde(default)]
    pub cart: Option<Vec<CartItem>>,
    #[serde(default)]
    pub total: Option<BigDecimal>,
}

impl Reservation {
    pub fn items(&self) -> &[CartItem] {
        self.cart.as_deref().unwrap_or_default()
    }

    pub fn formatted_total(&self) -> String {
        format_amount(&self.total.clone().unwrap_or_else(BigDecimal::zero))
    }

    pub fn form(&self) -> FormData {
        self.form_data.clone().unwrap_or_default()
    }
}
