use super::types::OrderConfirmed;
use crate::{
    modules::{payfast::payment::format_amount, reservation::types::Reservation},
    utils::html::escape,
};
use chrono::Datelike;

const STYLE: &str = r#"body { font-family: Georgia, serif; background: #f5f5f5; margin: 0; padding: 24px; color: #333; }
    .container { max-width: 560px; margin: 0 auto; background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,0.08); }
    .header { background: #000; color: #D4AF37; padding: 24px; text-align: center; }
    .header h1 { margin: 0; font-size: 1.5rem; }
    .body { padding: 32px 24px; line-height: 1.6; }
    .highlight { font-size: 1.25rem; color: #D4AF37; font-weight: bold; margin: 16px 0; }
    .items { white-space: pre-wrap; font-family: inherit; background: #f9f9f9; padding: 16px; border-radius: 6px; margin: 12px 0; }
    .footer { padding: 16px 24px; background: #f9f9f9; font-size: 0.875rem; color: #666; text-align: center; }"#;

const TAGLINE: &str = "Restoring the Crown of the Believer";

fn layout(heading: &str, subheading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    {style}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{heading}</h1>
      <p style="margin: 0.25rem 0 0; font-size: 0.9rem; color: rgba(255,255,255,0.9);">{subheading}</p>
    </div>
    <div class="body">
{body}
    </div>
    <div class="footer">
      © {year} Al-Ameen Caps. All rights reserved.
    </div>
  </div>
</body>
</html>"#,
        style = STYLE,
        heading = heading,
        subheading = subheading,
        body = body,
        year = chrono::Utc::now().year(),
    )
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|value| !value.is_empty()).unwrap_or("—")
}

fn order_amount(n: &OrderConfirmed) -> &str {
    or_dash(n.amount.as_deref())
}

pub fn order_confirmed_html(site_url: &str, n: &OrderConfirmed) -> String {
    let name = n.customer_name.as_deref().unwrap_or("Customer");
    let body = format!(
        r#"      <p>Assalamu alaikum {name},</p>
      <p>Thank you for your order. Your payment was successful and we have received your order.</p>
      <p><strong>Amount paid:</strong> <span class="highlight">R {amount}</span></p>
      <p>Fastway Couriers will deliver your order within 2–5 business days. We will send you tracking details once your parcel is dispatched.</p>
      <p>If you have any questions, please reply to this email or use our <a href="{contact}">Contact</a> page.</p>
      <p>Jazakallah khair,<br><strong>Al-Ameen Caps</strong></p>"#,
        name = escape(name),
        amount = escape(order_amount(n)),
        contact = escape(&format!("{}/contact", site_url.trim_end_matches('/'))),
    );

    layout("Al-Ameen Caps", TAGLINE, &body)
}

pub fn order_confirmed_text(n: &OrderConfirmed) -> String {
    format!(
        "Thank you for your order. Amount paid: R {}. Fastway Couriers will deliver within 2–5 business days. Al-Ameen Caps.",
        order_amount(n)
    )
}

fn admin_item_lines(reservation: &Reservation) -> String {
    reservation
        .items()
        .iter()
        .map(|item| {
            format!(
                "• {} × {} — R{}",
                item.name(),
                item.quantity(),
                format_amount(&item.line_total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn customer_item_lines(reservation: &Reservation) -> String {
    let lines = reservation
        .items()
        .iter()
        .map(|item| format!("• {} × {}", item.name(), item.quantity()))
        .collect::<Vec<_>>()
        .join("\n");

    match lines.is_empty() {
        true => String::from("—"),
        false => lines,
    }
}

pub fn reservation_received_html(reservation: &Reservation) -> String {
    let form = reservation.form();
    let name = form.full_name().unwrap_or_else(|| String::from("Customer"));
    let items = admin_item_lines(reservation);

    let mut address = escape(form.address_line_1.as_deref().unwrap_or_default());
    if let Some(line_2) = form.address_line_2.as_deref().filter(|line| !line.is_empty()) {
        address.push_str("<br>");
        address.push_str(&escape(line_2));
    }

    let body = format!(
        r#"      <p><strong>Customer:</strong> {name}</p>
      <p><strong>Email:</strong> {email}</p>
      <p><strong>Phone:</strong> {phone}</p>
      <p><strong>Address:</strong><br>{address}<br>{city} {postal_code}</p>
      <p><strong>Items:</strong></p>
      <pre style="white-space: pre-wrap; font-family: inherit;">{items}</pre>
      <p><strong>Total:</strong> <span class="highlight">R {total}</span></p>
      <p>We will contact this customer when the inaugural collection arrives.</p>"#,
        name = escape(&name),
        email = escape(or_dash(form.email_address.as_deref())),
        phone = escape(or_dash(form.cell_number.as_deref())),
        address = address,
        city = escape(form.city.as_deref().unwrap_or_default()),
        postal_code = escape(form.postal_code.as_deref().unwrap_or_default()),
        items = escape(or_dash(Some(items.as_str()))),
        total = reservation.formatted_total(),
    );

    layout("NEW RESERVATION — Al-Ameen Caps", "Inaugural Collection", &body)
}

pub fn reservation_received_text(reservation: &Reservation) -> String {
    let form = reservation.form();

    format!(
        "NEW RESERVATION from {} {} ({}). Total: R{}.",
        form.name_first.as_deref().unwrap_or_default(),
        form.name_last.as_deref().unwrap_or_default(),
        form.email_address.as_deref().unwrap_or_default(),
        reservation.formatted_total()
    )
}

const NEXT_STEPS: &str = "Our collection is currently being handcrafted and imported. As soon as your items arrive at our boutique in Cape Town, we will contact you personally via this email address to finalize your order and arrange delivery.";
const NO_PAYMENT: &str = "No payment is required at this stage. You have secured your place in our priority delivery queue.";

pub fn reservation_confirmed_html(reservation: &Reservation) -> String {
    let name = reservation
        .form()
        .full_name()
        .unwrap_or_else(|| String::from("Valued Customer"));

    let body = format!(
        r#"      <p>Assalamu alaikum {name},</p>
      <p>Thank you for your interest in the Al-Ameen Caps Inaugural Collection. We have successfully recorded your reservation.</p>
      <p><strong>Items Reserved:</strong></p>
      <div class="items">{items}</div>
      <p><strong>What happens next?</strong></p>
      <p>{next_steps}</p>
      <p>{no_payment}</p>
      <p>Jazakallah khair for your patience and for choosing Al-Ameen Caps.</p>
      <p>Warm regards,<br><strong>The Al-Ameen Caps Team</strong><br>"{tagline}"</p>"#,
        name = escape(&name),
        items = escape(&customer_item_lines(reservation)),
        next_steps = NEXT_STEPS,
        no_payment = NO_PAYMENT,
        tagline = TAGLINE,
    );

    layout("Al-Ameen Caps", TAGLINE, &body)
}

pub fn reservation_confirmed_text(reservation: &Reservation) -> String {
    let name = reservation
        .form()
        .full_name()
        .unwrap_or_else(|| String::from("Valued Customer"));

    format!(
        "Assalamu alaikum {name},\n\nThank you for your interest in the Al-Ameen Caps Inaugural Collection. We have successfully recorded your reservation.\n\nItems Reserved:\n{items}\n\nWhat happens next?\n{next_steps}\n\n{no_payment}\n\nJazakallah khair for your patience and for choosing Al-Ameen Caps.\n\nWarm regards,\nThe Al-Ameen Caps Team\n\"{tagline}\"",
        name = name,
        items = customer_item_lines(reservation),
        next_steps = NEXT_STEPS,
        no_payment = NO_PAYMENT,
        tagline = TAGLINE,
    )
}
