//! Printable receipt rendering and the WhatsApp deep link. One renderer
//! serves both output channels (in-page print and print-to-PDF in a new
//! context), parameterized by the physical page format.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Order;

const RECEIPT_FOOTER: &str = "Obrigado pela sua preferência!";

/// Supported physical page formats for the printable receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
pub enum PageFormat {
    #[serde(rename = "a4")]
    A4,
    #[serde(rename = "thermal")]
    Thermal80,
}

impl Default for PageFormat {
    fn default() -> Self {
        PageFormat::Thermal80
    }
}

impl PageFormat {
    fn page_rule(self) -> &'static str {
        match self {
            PageFormat::A4 => "@page { size: A4; margin: 20mm; }",
            PageFormat::Thermal80 => "@page { size: 80mm auto; margin: 4mm; }",
        }
    }

    fn body_width(self) -> &'static str {
        match self {
            PageFormat::A4 => "max-width: 170mm;",
            PageFormat::Thermal80 => "max-width: 72mm;",
        }
    }
}

/// Format a decimal amount as pt-BR currency, e.g. `R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {int_grouped},{frac_part}")
}

/// Deep link carrying a pre-formatted order summary to the customer's
/// stored contact number.
pub fn whatsapp_link(order: &Order) -> String {
    let mut text = format!(
        "Olá, {}! Sobre seu pedido #{}:\n",
        order.customer.name,
        order.short_id()
    );
    for item in &order.items {
        text.push_str(&format!(
            "{}x {}: {}\n",
            item.quantity,
            item.product_name,
            format_brl(Decimal::from(item.quantity) * item.price)
        ));
    }
    text.push_str(&format!("Total: {}\n", format_brl(order.total)));
    text.push_str(RECEIPT_FOOTER);

    format!(
        "https://wa.me/{}?text={}",
        order.customer.whatsapp,
        utf8_percent_encode(&text, NON_ALPHANUMERIC)
    )
}

/// Render a self-contained printable receipt document for the order.
pub fn render_receipt(order: &Order, format: PageFormat) -> String {
    let mut rows = String::new();
    for item in &order.items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            item.quantity,
            escape_html(&item.product_name),
            format_brl(item.price),
            format_brl(Decimal::from(item.quantity) * item.price)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Recibo - Pedido #{short_id}</title>
<style>
{page_rule}
body {{ font-family: monospace; margin: 0 auto; {body_width} }}
h2 {{ text-align: center; margin-bottom: 0; }}
table {{ width: 100%; border-collapse: collapse; }}
th, td {{ text-align: left; padding: 2px 4px; border-bottom: 1px dashed #999; }}
.receipt-total {{ display: flex; justify-content: space-between; font-weight: bold; margin-top: 8px; }}
.receipt-footer {{ text-align: center; margin-top: 12px; }}
</style>
</head>
<body>
<div class="receipt-header">
<h2>Recibo</h2>
<p>Pedido #{short_id}</p>
</div>
<div class="receipt-body">
<div class="customer-info">
<p><strong>Cliente:</strong> {customer}</p>
<p><strong>Endereço:</strong> {address}</p>
</div>
<table>
<thead>
<tr><th>Qtd</th><th>Produto</th><th>Preço Unit.</th><th>Total</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
<div class="receipt-total">
<p>Total a Pagar:</p>
<p>{total}</p>
</div>
</div>
<div class="receipt-footer">
<p>{footer}</p>
</div>
</body>
</html>
"#,
        short_id = escape_html(order.short_id()),
        page_rule = format.page_rule(),
        body_width = format.body_width(),
        customer = escape_html(&order.customer.name),
        address = escape_html(&order.customer.address),
        rows = rows,
        total = format_brl(order.total),
        footer = RECEIPT_FOOTER,
    )
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
