//! Change-notification subscriptions. One Postgres LISTEN connection covers
//! both channels; any event on a table triggers a full reload of its mirror
//! (insert, update and delete are not distinguished).

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgListener;
use tokio::task::JoinHandle;

use crate::store::DataStore;

pub const PRODUCTS_CHANNEL: &str = "products_changed";
pub const ORDERS_CHANNEL: &str = "orders_changed";

/// Subscribe to the change channels and keep reloading the affected
/// collection until the returned task is aborted at shutdown.
pub async fn spawn_change_listener(
    database_url: &str,
    store: Arc<DataStore>,
) -> anyhow::Result<JoinHandle<()>> {
    let mut listener = PgListener::connect(database_url).await?;
    listener.listen_all([PRODUCTS_CHANNEL, ORDERS_CHANNEL]).await?;
    tracing::info!("change listener subscribed to products and orders");

    let handle = tokio::spawn(async move {
        loop {
            match listener.recv().await {
                Ok(notification) => {
                    tracing::debug!(
                        channel = notification.channel(),
                        payload = notification.payload(),
                        "change notification"
                    );
                    let reload = match notification.channel() {
                        PRODUCTS_CHANNEL => store.load_products().await,
                        ORDERS_CHANNEL => store.load_orders().await,
                        _ => Ok(()),
                    };
                    // The failure is already recorded on the store; the
                    // mirror keeps its previous contents.
                    if let Err(err) = reload {
                        tracing::warn!(error = %err, "reload after change notification failed");
                    }
                }
                Err(err) => {
                    // sqlx re-establishes the LISTENs on reconnect.
                    tracing::warn!(error = %err, "change listener connection lost, retrying");
                    tokio::time::sleep(Duration::from_secs(5)).await;
                }
            }
        }
    });

    Ok(handle)
}
