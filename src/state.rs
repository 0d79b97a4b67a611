use std::sync::Arc;

use crate::{session::Session, storage::ImageStore, store::DataStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub session: Arc<Session>,
    pub images: Arc<ImageStore>,
}
