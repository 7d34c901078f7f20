use serde::Serialize;
use tokio::sync::Mutex;
use tracing::error;

use crate::handlers::products::ProductService;
use crate::models::{NewProduct, Product};

/// Form fields as submitted, before any parsing. Kept in the state so a
/// failed submit re-renders with the user's input intact.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub img: String,
}

impl ProductDraft {
    fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.price.is_empty()
            && !self.description.is_empty()
            && !self.img.is_empty()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Mutually exclusive status messages: setting one clears the other.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Status {
    pub error: String,
    pub success: String,
}

impl Status {
    fn set_error(&mut self, msg: &str) {
        self.error = msg.to_string();
        self.success.clear();
    }

    fn set_success(&mut self, msg: &str) {
        self.success = msg.to_string();
        self.error.clear();
    }
}

#[derive(Debug, Default, Clone)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub draft: ProductDraft,
    pub status: Status,
}

/// Catalog screen: holds the view state and runs the three flows
/// (load, add, delete) against the remote product service. The state is a
/// single shared cell updated only from flow completions; overlapping flows
/// are not guarded against.
pub struct CatalogScreen<S> {
    service: S,
    state: Mutex<CatalogState>,
}

impl<S: ProductService> CatalogScreen<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(CatalogState::default()),
        }
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.state.lock().await.clone()
    }

    /// Initial load. A failure is logged only, never shown to the user.
    pub async fn load(&self) {
        match self.service.fetch_products().await {
            Ok(products) => {
                self.state.lock().await.products = products;
            }
            Err(e) => {
                error!("Fetch error: {}", e);
            }
        }
    }

    pub async fn add(&self, draft: ProductDraft) {
        let payload = {
            let mut state = self.state.lock().await;
            state.draft = draft;

            // ตรวจสอบว่ามีข้อมูลครบถ้วนหรือไม่
            if !state.draft.is_complete() {
                state.status.set_error("All fields are required");
                return;
            }

            let price = match state.draft.price.trim().parse::<f64>() {
                Ok(price) => price,
                Err(e) => {
                    error!("Price parse error: {}", e);
                    state.status.set_error("Failed to add product");
                    return;
                }
            };

            NewProduct {
                title: state.draft.title.clone(),
                price,
                description: state.draft.description.clone(),
                img: state.draft.img.clone(),
            }
        };

        if let Err(e) = self.service.post_product(&payload).await {
            error!("Fetch error: {}", e);
            self.state.lock().await.status.set_error("Failed to add product");
            return;
        }

        // สำเร็จแล้ว ดึงรายการสินค้าใหม่อีกครั้ง
        match self.service.fetch_products().await {
            Ok(products) => {
                let mut state = self.state.lock().await;
                state.products = products;
                state.status.set_success("Product added successfully!");
                state.draft.clear();
            }
            Err(e) => {
                // create went through server-side, but the flow still
                // reports the add as failed
                error!("Fetch error: {}", e);
                self.state.lock().await.status.set_error("Failed to add product");
            }
        }
    }

    /// Delete removes the entry from the local collection only; no re-fetch.
    pub async fn delete(&self, id: i64) {
        match self.service.delete_product(id).await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                state.products.retain(|product| product.id != id);
                state.status.set_success("Product deleted successfully!");
            }
            Err(e) => {
                error!("Fetch error: {}", e);
                self.state
                    .lock()
                    .await
                    .status
                    .set_error("Failed to delete product");
            }
        }
    }
}
