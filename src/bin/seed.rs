//! Local seed data. Orders are created by the storefront in production;
//! this bin plays that external role for development.

use axum_orders_dashboard::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Products, categories, order_items, orders, products},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    if Products::find().count(&orm).await? > 0 {
        println!("Catalog already seeded, nothing to do");
        return Ok(());
    }

    let bolos = categories::ActiveModel {
        id: NotSet,
        name: Set("Bolos".to_string()),
    }
    .insert(&orm)
    .await?;
    let salgados = categories::ActiveModel {
        id: NotSet,
        name: Set("Salgados".to_string()),
    }
    .insert(&orm)
    .await?;
    let doces = categories::ActiveModel {
        id: NotSet,
        name: Set("Doces".to_string()),
    }
    .insert(&orm)
    .await?;

    let bolo = seed_product(&orm, "Bolo de Chocolate", bolos.id, "45.00", "20cm", "un").await?;
    let coxinha = seed_product(&orm, "Coxinha", salgados.id, "120.00", "", "100 un").await?;
    let brigadeiro = seed_product(&orm, "Brigadeiro", doces.id, "90.00", "", "100 un").await?;

    seed_order(
        &orm,
        "Maria Silva",
        "5511999990001",
        "Rua das Flores, 123",
        "Concluído",
        Some("Pago"),
        &[(bolo.id, 1, "45.00"), (brigadeiro.id, 1, "90.00")],
        "135.00",
    )
    .await?;
    seed_order(
        &orm,
        "João Souza",
        "5511999990002",
        "Av. Central, 400",
        "Aguardando Aprovação",
        None,
        &[(coxinha.id, 2, "120.00")],
        "240.00",
    )
    .await?;

    println!("Seeded 3 categories, 3 products, 2 orders");
    Ok(())
}

async fn seed_product(
    orm: &DatabaseConnection,
    name: &str,
    category_id: i32,
    price: &str,
    size: &str,
    unit: &str,
) -> anyhow::Result<products::Model> {
    let model = products::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price.parse::<Decimal>()?),
        category_id: Set(Some(category_id)),
        size: Set(if size.is_empty() {
            None
        } else {
            Some(size.to_string())
        }),
        unit: Set(Some(unit.to_string())),
        image_url: Set(None),
    }
    .insert(orm)
    .await?;
    Ok(model)
}

#[allow(clippy::too_many_arguments)]
async fn seed_order(
    orm: &DatabaseConnection,
    name: &str,
    whatsapp: &str,
    address: &str,
    status: &str,
    payment_status: Option<&str>,
    items: &[(i32, i32, &str)],
    total: &str,
) -> anyhow::Result<Uuid> {
    let order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        customer_name: Set(name.to_string()),
        customer_whatsapp: Set(whatsapp.to_string()),
        delivery_address: Set(address.to_string()),
        status: Set(status.to_string()),
        payment_status: Set(payment_status.map(str::to_string)),
        subtotal: Set(total.parse::<Decimal>()?),
        created_at: Set(Utc::now().into()),
        data_agendamento: Set(None),
        turno: Set(None),
        horario_agendamento: Set(None),
    }
    .insert(orm)
    .await?;

    for (product_id, quantity, unit_price) in items {
        order_items::ActiveModel {
            id: NotSet,
            order_id: Set(order.id),
            product_id: Set(Some(*product_id)),
            quantity: Set(*quantity),
            unit_price: Set(unit_price.parse::<Decimal>()?),
        }
        .insert(orm)
        .await?;
    }

    Ok(order.id)
}
