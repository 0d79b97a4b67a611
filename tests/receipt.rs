use axum_orders_dashboard::models::{Customer, Order, OrderItem, OrderStatus, PaymentStatus};
use axum_orders_dashboard::receipt::{self, PageFormat};
use axum_orders_dashboard::storage::{ImageStore, sanitize_file_name};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

fn sample_order() -> Order {
    Order {
        id: "0d9c3a6e-8d2f-4a6e-9f1b-1234567890ab".to_string(),
        customer: Customer {
            name: "Maria Silva".to_string(),
            whatsapp: "5511999990001".to_string(),
            address: "Rua das Flores, 123".to_string(),
        },
        items: vec![
            OrderItem {
                product_id: "1".to_string(),
                product_name: "Bolo de Chocolate".to_string(),
                quantity: 2,
                price: "45.00".parse().unwrap(),
            },
            OrderItem {
                product_id: "2".to_string(),
                product_name: "Brigadeiro <100 un>".to_string(),
                quantity: 1,
                price: "90.00".parse().unwrap(),
            },
        ],
        status: OrderStatus::EmPreparo,
        payment_status: PaymentStatus::Pendente,
        total: "180.00".parse().unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
        data_agendamento: None,
        turno: None,
        horario_agendamento: None,
    }
}

#[test]
fn format_brl_uses_ptbr_separators() {
    assert_eq!(receipt::format_brl(Decimal::from(50)), "R$ 50,00");
    assert_eq!(receipt::format_brl("1234.5".parse().unwrap()), "R$ 1.234,50");
    assert_eq!(receipt::format_brl("0.5".parse().unwrap()), "R$ 0,50");
    assert_eq!(
        receipt::format_brl("1234567.89".parse().unwrap()),
        "R$ 1.234.567,89"
    );
    assert_eq!(receipt::format_brl("-12.3".parse().unwrap()), "-R$ 12,30");
}

#[test]
fn receipt_carries_items_total_and_page_rule() {
    let order = sample_order();

    let thermal = receipt::render_receipt(&order, PageFormat::Thermal80);
    assert!(thermal.contains("size: 80mm auto"));
    assert!(thermal.contains("Maria Silva"));
    assert!(thermal.contains("Rua das Flores, 123"));
    assert!(thermal.contains("Bolo de Chocolate"));
    assert!(thermal.contains("R$ 90,00"));
    assert!(thermal.contains("R$ 180,00"));
    assert!(thermal.contains("Obrigado pela sua preferência!"));
    // Short id: last six characters of the full id.
    assert!(thermal.contains("Pedido #7890ab"));

    let a4 = receipt::render_receipt(&order, PageFormat::A4);
    assert!(a4.contains("size: A4"));
    assert!(!a4.contains("80mm"));
}

#[test]
fn receipt_escapes_markup_in_names() {
    let order = sample_order();
    let html = receipt::render_receipt(&order, PageFormat::A4);
    assert!(html.contains("Brigadeiro &lt;100 un&gt;"));
    assert!(!html.contains("Brigadeiro <100 un>"));
}

#[test]
fn whatsapp_link_targets_the_customer_with_an_encoded_summary() {
    let order = sample_order();
    let url = receipt::whatsapp_link(&order);

    assert!(url.starts_with("https://wa.me/5511999990001?text="));
    let (_, text) = url.split_once("?text=").unwrap();
    // Fully percent-encoded payload: no raw spaces or line breaks survive.
    assert!(!text.contains(' '));
    assert!(!text.contains('\n'));
    assert!(text.contains("Ol%C3%A1"));
    assert!(text.contains("7890ab"));
    assert!(text.contains("Total"));
}

#[test]
fn upload_names_are_sanitized() {
    assert_eq!(sanitize_file_name("Açaí da Casa.PNG"), "acai-da-casa.png");
    assert_eq!(sanitize_file_name("foto nova (1).jpg"), "foto-nova-1.jpg");
    assert_eq!(sanitize_file_name("ŕé çã  ó.jpeg"), "re-ca-o.jpeg");
    assert_eq!(sanitize_file_name("ok_name-2.webp"), "ok_name-2.webp");
}

#[tokio::test]
async fn image_store_saves_under_a_timestamped_public_url() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = ImageStore::new(dir.path().to_path_buf(), "http://localhost:3000/".to_string());

    let url = store.save("Foto do Bolo.png", b"not really a png").await?;

    assert!(url.starts_with("http://localhost:3000/uploads/"));
    assert!(url.ends_with("_foto-do-bolo.png"));

    let file_name = url.rsplit('/').next().unwrap();
    let stored = tokio::fs::read(dir.path().join(file_name)).await?;
    assert_eq!(stored, b"not really a png");
    Ok(())
}
