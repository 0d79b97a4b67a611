use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        dashboard::{RevenueSeries, StatusDistribution, TopProducts, WindowQuery},
        orders::{
            OrderList, OrderListQuery, ReceiptQuery, TransitionOptions, UpdateOrderStatusRequest,
            UpdatePaymentStatusRequest, WhatsappLink,
        },
        products::{ProductList, UploadQuery, UploadResponse},
        session::{CurrentSession, SwitchUserRequest, UserList},
        sync::SyncStatus,
    },
    models::{Category, Customer, Order, OrderItem, OrderStatus, PaymentStatus, Product, Role, User},
    receipt::PageFormat,
    response::ApiResponse,
    routes::{categories, dashboard, health, orders, products, session, sync},
    stats::{DailySummary, RevenuePoint, StatusCount, TopProduct, Window},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        products::list_products,
        products::save_product,
        products::delete_product,
        products::upload_image,
        orders::list_orders,
        orders::get_order,
        orders::update_order_status,
        orders::update_payment_status,
        orders::order_transitions,
        orders::order_receipt,
        orders::order_whatsapp_link,
        dashboard::summary,
        dashboard::status_distribution,
        dashboard::revenue_series,
        dashboard::top_products,
        session::list_users,
        session::current_user,
        session::switch_user,
        session::logout,
        sync::sync_status,
        sync::refresh
    ),
    components(
        schemas(
            Category,
            Customer,
            Order,
            OrderItem,
            OrderStatus,
            PaymentStatus,
            Product,
            Role,
            User,
            PageFormat,
            Window,
            DailySummary,
            StatusCount,
            RevenuePoint,
            TopProduct,
            categories::CategoryList,
            OrderList,
            OrderListQuery,
            ReceiptQuery,
            TransitionOptions,
            UpdateOrderStatusRequest,
            UpdatePaymentStatusRequest,
            WhatsappLink,
            ProductList,
            UploadQuery,
            UploadResponse,
            CurrentSession,
            SwitchUserRequest,
            UserList,
            StatusDistribution,
            RevenueSeries,
            TopProducts,
            WindowQuery,
            SyncStatus,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<DailySummary>,
            ApiResponse<SyncStatus>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category reference data"),
        (name = "Products", description = "Catalog management"),
        (name = "Orders", description = "Order management and receipts"),
        (name = "Dashboard", description = "Aggregate statistics"),
        (name = "Session", description = "User switcher"),
        (name = "Sync", description = "Mirror state and refresh"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
