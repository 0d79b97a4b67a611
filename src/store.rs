use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    entity::{
        categories::{Column as CategoryCol, Entity as Categories, Model as CategoryModel},
        order_items::{Column as OrderItemCol, Entity as OrderItems, Model as OrderItemModel},
        orders::{Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::{
            ActiveModel as ProductActive, Column as ProdCol, Entity as Products,
            Model as ProductModel,
        },
    },
    error::{AppError, AppResult},
    models::{Category, Customer, Order, OrderItem, OrderStatus, PaymentStatus, Product},
};

/// Single source of truth for the remote-backed collections. The mirrors are
/// eventually-consistent copies of the remote store: loads replace a whole
/// collection, point updates patch the matching entry, and change
/// notifications trigger full reloads. Only this type writes the mirrors;
/// everything else reads cloned snapshots.
pub struct DataStore {
    orm: DatabaseConnection,
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
    // Overlapping reloads of one collection are serialized so a slow fetch
    // cannot overwrite a newer one. Collections still reload independently.
    categories_reload: Mutex<()>,
    products_reload: Mutex<()>,
    orders_reload: Mutex<()>,
    // Single current error, last-write-wins. No queue.
    last_error: RwLock<Option<String>>,
}

impl DataStore {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self {
            orm,
            categories: RwLock::new(Vec::new()),
            products: RwLock::new(Vec::new()),
            orders: RwLock::new(Vec::new()),
            categories_reload: Mutex::new(()),
            products_reload: Mutex::new(()),
            orders_reload: Mutex::new(()),
            last_error: RwLock::new(None),
        }
    }

    /// Initial load of the three collections. Each collection keeps its own
    /// error state; a failing one leaves the others untouched.
    pub async fn load_all(&self) -> AppResult<()> {
        let (categories, products, orders) = tokio::join!(
            self.load_categories(),
            self.load_products(),
            self.load_orders()
        );
        categories.and(products).and(orders)
    }

    pub async fn load_categories(&self) -> AppResult<()> {
        let _reload = self.categories_reload.lock().await;
        match Categories::find()
            .order_by_asc(CategoryCol::Name)
            .all(&self.orm)
            .await
        {
            Ok(rows) => {
                let mapped = rows.into_iter().map(category_from_entity).collect();
                *self.categories.write().await = mapped;
                Ok(())
            }
            Err(err) => {
                let message = format!("Erro ao carregar categorias: {err}");
                Err(self.fail(message, err).await)
            }
        }
    }

    pub async fn load_products(&self) -> AppResult<()> {
        let _reload = self.products_reload.lock().await;
        match Products::find()
            .order_by_asc(ProdCol::Name)
            .all(&self.orm)
            .await
        {
            Ok(rows) => {
                let mapped = rows.into_iter().map(product_from_entity).collect();
                *self.products.write().await = mapped;
                Ok(())
            }
            Err(err) => {
                let message = format!("Erro ao carregar produtos: {err}");
                Err(self.fail(message, err).await)
            }
        }
    }

    pub async fn load_orders(&self) -> AppResult<()> {
        let _reload = self.orders_reload.lock().await;
        match self.fetch_orders().await {
            Ok(mapped) => {
                *self.orders.write().await = mapped;
                Ok(())
            }
            Err(err) => {
                let message = format!("Erro ao carregar pedidos: {err}");
                Err(self.fail(message, err).await)
            }
        }
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, DbErr> {
        let rows = Orders::find()
            .order_by_desc(OrderCol::CreatedAt)
            .all(&self.orm)
            .await?;

        // Secondary fetch of the line items for the fetched order ids,
        // joined in memory by order id.
        let ids: Vec<Uuid> = rows.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        if !ids.is_empty() {
            let item_rows = OrderItems::find()
                .filter(OrderItemCol::OrderId.is_in(ids))
                .find_also_related(Products)
                .all(&self.orm)
                .await?;
            for (item, product) in item_rows {
                items_by_order
                    .entry(item.order_id)
                    .or_default()
                    .push(order_item_from_entity(item, product));
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                order_from_entity(row, items)
            })
            .collect())
    }

    /// Remote point update of the status column, then a local patch of the
    /// matching order. No full reload.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> AppResult<Order> {
        let id = parse_order_id(order_id)?;
        match Orders::update_many()
            .col_expr(OrderCol::Status, Expr::value(new_status.as_str()))
            .filter(OrderCol::Id.eq(id))
            .exec(&self.orm)
            .await
        {
            Ok(res) if res.rows_affected == 0 => Err(AppError::NotFound),
            Ok(_) => {
                let mut orders = self.orders.write().await;
                let order = orders
                    .iter_mut()
                    .find(|o| o.id == order_id)
                    .ok_or(AppError::NotFound)?;
                order.status = new_status;
                Ok(order.clone())
            }
            Err(err) => {
                let message = format!("Erro ao atualizar status do pedido: {err}");
                Err(self.fail(message, err).await)
            }
        }
    }

    /// Payment status is unguarded: any value may be set at any time,
    /// whatever the order status.
    pub async fn update_payment_status(
        &self,
        order_id: &str,
        new_status: PaymentStatus,
    ) -> AppResult<Order> {
        let id = parse_order_id(order_id)?;
        match Orders::update_many()
            .col_expr(OrderCol::PaymentStatus, Expr::value(new_status.as_str()))
            .filter(OrderCol::Id.eq(id))
            .exec(&self.orm)
            .await
        {
            Ok(res) if res.rows_affected == 0 => Err(AppError::NotFound),
            Ok(_) => {
                let mut orders = self.orders.write().await;
                let order = orders
                    .iter_mut()
                    .find(|o| o.id == order_id)
                    .ok_or(AppError::NotFound)?;
                order.payment_status = new_status;
                Ok(order.clone())
            }
            Err(err) => {
                let message = format!("Erro ao atualizar status do pagamento: {err}");
                Err(self.fail(message, err).await)
            }
        }
    }

    /// Insert or update depending on the id: a placeholder id (`new-*`)
    /// inserts and appends to the mirror (re-sorted by name); a persisted id
    /// updates the remote row and replaces the mirror entry.
    pub async fn save_product(&self, product: Product) -> AppResult<Product> {
        // Coerced to an integer key when numeric; otherwise the column stays
        // unset (an update then leaves the stored value untouched).
        let category_id = product.category_id.parse::<i32>().ok();

        if product.has_placeholder_id() {
            let active = ProductActive {
                id: NotSet,
                name: Set(product.name),
                price: Set(product.price),
                category_id: match category_id {
                    Some(c) => Set(Some(c)),
                    None => NotSet,
                },
                size: Set(none_if_empty(product.size)),
                unit: Set(none_if_empty(product.unit)),
                image_url: Set(none_if_empty(product.image_url)),
            };
            match active.insert(&self.orm).await {
                Ok(row) => {
                    let created = product_from_entity(row);
                    let mut products = self.products.write().await;
                    products.push(created.clone());
                    products.sort_by(|a, b| a.name.cmp(&b.name));
                    Ok(created)
                }
                Err(err) => {
                    let message = format!("Erro ao salvar produto: {err}");
                    Err(self.fail(message, err).await)
                }
            }
        } else {
            let id = product
                .id
                .parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid product id {}", product.id)))?;
            let active = ProductActive {
                id: Set(id),
                name: Set(product.name),
                price: Set(product.price),
                category_id: match category_id {
                    Some(c) => Set(Some(c)),
                    None => NotSet,
                },
                size: Set(none_if_empty(product.size)),
                unit: Set(none_if_empty(product.unit)),
                image_url: Set(none_if_empty(product.image_url)),
            };
            match active.update(&self.orm).await {
                Ok(row) => {
                    let updated = product_from_entity(row);
                    let mut products = self.products.write().await;
                    if let Some(entry) = products.iter_mut().find(|p| p.id == updated.id) {
                        *entry = updated.clone();
                    }
                    Ok(updated)
                }
                Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
                Err(err) => {
                    let message = format!("Erro ao salvar produto: {err}");
                    Err(self.fail(message, err).await)
                }
            }
        }
    }

    pub async fn delete_product(&self, product_id: &str) -> AppResult<()> {
        let id = product_id
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Invalid product id {product_id}")))?;
        match Products::delete_by_id(id).exec(&self.orm).await {
            Ok(res) if res.rows_affected == 0 => Err(AppError::NotFound),
            Ok(_) => {
                self.products.write().await.retain(|p| p.id != product_id);
                Ok(())
            }
            Err(err) => {
                let message = format!("Erro ao deletar produto: {err}");
                Err(self.fail(message, err).await)
            }
        }
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn order_by_id(&self, order_id: &str) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// Record a user-facing failure message, replacing any prior one.
    pub async fn record_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        *self.last_error.write().await = Some(message);
    }

    async fn fail(&self, message: String, err: DbErr) -> AppError {
        self.record_error(message).await;
        AppError::OrmError(err)
    }
}

fn parse_order_id(order_id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(order_id)
        .map_err(|_| AppError::BadRequest(format!("Invalid order id {order_id}")))
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn placeholder_image(name: &str) -> String {
    format!("https://picsum.photos/seed/{name}/400")
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id.to_string(),
        name: model.name,
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    let image_url = match model.image_url {
        Some(url) if !url.is_empty() => url,
        _ => placeholder_image(&model.name),
    };
    Product {
        id: model.id.to_string(),
        category_id: model
            .category_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
        price: model.price,
        size: model.size.unwrap_or_default(),
        unit: model.unit.unwrap_or_default(),
        image_url,
        name: model.name,
    }
}

fn order_item_from_entity(model: OrderItemModel, product: Option<ProductModel>) -> OrderItem {
    // The product reference is weak; a dangling one keeps the snapshot
    // quantity/price and renders as "N/A".
    let (product_id, product_name) = match product {
        Some(p) => (p.id.to_string(), p.name),
        None => (String::new(), "N/A".to_string()),
    };
    OrderItem {
        product_id,
        product_name,
        quantity: model.quantity,
        price: model.unit_price,
    }
}

fn order_from_entity(model: OrderModel, items: Vec<OrderItem>) -> Order {
    let status = OrderStatus::from_wire(&model.status).unwrap_or(OrderStatus::Aguardando);
    let payment_status = model
        .payment_status
        .as_deref()
        .and_then(PaymentStatus::from_wire)
        .unwrap_or(PaymentStatus::Pendente);
    Order {
        id: model.id.to_string(),
        customer: Customer {
            name: model.customer_name,
            whatsapp: model.customer_whatsapp,
            address: model.delivery_address,
        },
        items,
        status,
        payment_status,
        total: model.subtotal,
        created_at: model.created_at.with_timezone(&Utc),
        data_agendamento: model.data_agendamento,
        turno: model.turno,
        horario_agendamento: model.horario_agendamento,
    }
}
