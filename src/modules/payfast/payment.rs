use super::{
    fields::FieldList,
    signature::{self, SIGNATURE_KEY},
};
use crate::{types::PayfastContext, utils::html::escape};
use bigdecimal::BigDecimal;

/// An order about to be handed to the hosted payment page.
#[derive(Clone, Debug)]
pub struct PaymentRequest {
    pub name_first: String,
    pub name_last: String,
    pub email_address: String,
    pub m_payment_id: String,
    pub amount: BigDecimal,
    pub item_name: String,
}

/// Renders an amount with exactly two decimals, rounding half-up.
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.round(2).with_scale(2).to_string()
}

impl PaymentRequest {
    /// Fields in the order the gateway expects them to be signed.
    pub fn into_fields(self, payfast: &PayfastContext) -> FieldList {
        FieldList::new()
            .with("merchant_id", &payfast.merchant_id)
            .with("merchant_key", &payfast.merchant_key)
            .with("return_url", &payfast.return_url)
            .with("cancel_url", &payfast.cancel_url)
            .with("notify_url", &payfast.notify_url)
            .with("name_first", self.name_first)
            .with("name_last", self.name_last)
            .with("email_address", self.email_address)
            .with("m_payment_id", self.m_payment_id)
            .with("amount", format_amount(&self.amount))
            .with("item_name", self.item_name)
    }
}

#[derive(Clone, Debug)]
pub struct SignedPaymentForm {
    pub action: String,
    pub fields: FieldList,
}

impl SignedPaymentForm {
    pub fn new(payfast: &PayfastContext, request: PaymentRequest) -> Self {
        let fields = request.into_fields(payfast);
        let signature = signature::sign(&fields, payfast.passphrase.as_deref());

        Self {
            action: payfast.process_url().to_string(),
            fields: fields.with(SIGNATURE_KEY, signature),
        }
    }

    /// HTML page that posts the form to the gateway as soon as it loads.
    pub fn render(&self) -> String {
        let inputs = self
            .fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| {
                format!(
                    r#"      <input type="hidden" name="{}" value="{}">"#,
                    escape(name),
                    escape(value)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Redirecting to PayFast…</title>
</head>
<body onload="document.forms['payfast'].submit()">
  <form id="payfast" name="payfast" action="{}" method="post">
{}
    <noscript><button type="submit">Continue to payment</button></noscript>
  </form>
</body>
</html>"#,
            escape(&self.action),
            inputs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn payfast(sandbox: bool, passphrase: Option<&str>) -> PayfastContext {
        PayfastContext {
            merchant_id: String::from("10000100"),
            merchant_key: String::from("46f0cd694581a"),
            passphrase: passphrase.map(String::from),
            sandbox,
            return_url: String::from("https://shop.test/success"),
            cancel_url: String::from("https://shop.test/cancel"),
            notify_url: String::from("https://api.shop.test/api/payfast/notify"),
        }
    }

    fn request() -> PaymentRequest {
        PaymentRequest {
            name_first: String::from("Aisha"),
            name_last: String::new(),
            email_address: String::from("aisha@example.com"),
            m_payment_id: String::from("1700000000000"),
            amount: BigDecimal::from(119),
            item_name: String::from("Al-Ameen Cap \"Black\""),
        }
    }

    #[test]
    fn formats_amounts_with_two_decimals() {
        assert_eq!(format_amount(&BigDecimal::from(119)), "119.00");
        assert_eq!(format_amount(&BigDecimal::from_str("99.5").unwrap()), "99.50");
        assert_eq!(format_amount(&BigDecimal::from_str("10.005").unwrap()), "10.01");
        assert_eq!(format_amount(&BigDecimal::from_str("10.004").unwrap()), "10.00");
    }

    #[test]
    fn fields_follow_gateway_order() {
        let keys = request()
            .into_fields(&payfast(true, None))
            .iter()
            .map(|(key, _)| key.to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            keys,
            vec![
                "merchant_id",
                "merchant_key",
                "return_url",
                "cancel_url",
                "notify_url",
                "name_first",
                "name_last",
                "email_address",
                "m_payment_id",
                "amount",
                "item_name",
            ]
        );
    }

    #[test]
    fn signs_every_field_but_signature() {
        let payfast = payfast(false, Some("jt7NOE43FZPn"));
        let form = SignedPaymentForm::new(&payfast, request());
        let unsigned = request().into_fields(&payfast);

        assert_eq!(form.action, "https://www.payfast.co.za/eng/process");
        assert_eq!(
            form.fields.get(SIGNATURE_KEY),
            Some(signature::sign(&unsigned, Some("jt7NOE43FZPn")).as_str())
        );
        assert_eq!(form.fields.iter().last().map(|(key, _)| key), Some(SIGNATURE_KEY));
    }

    #[test]
    fn renders_auto_submitting_form() {
        let html = SignedPaymentForm::new(&payfast(true, None), request()).render();

        assert!(html.contains(r#"action="https://sandbox.payfast.co.za/eng/process" method="post""#));
        assert!(html.contains(r#"name="amount" value="119.00""#));
        assert!(html.contains(r#"value="Al-Ameen Cap &quot;Black&quot;""#));
        assert!(!html.contains(r#"name="name_last""#));
        assert!(html.contains("document.forms['payfast'].submit()"));
    }
}
