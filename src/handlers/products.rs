use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use std::env;

use crate::models::{NewProduct, Product};

/// Remote product API: list, create, delete. Abstracted as a trait so the
/// screen can run against a fake in tests.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, String>;
    async fn post_product(&self, product: &NewProduct) -> Result<(), String>;
    async fn delete_product(&self, id: i64) -> Result<(), String>;
}

pub struct HttpProductService {
    base_url: String,
}

impl HttpProductService {
    pub fn from_env() -> Self {
        let base_url = env::var("API").unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self { base_url }
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn fetch_products(&self) -> Result<Vec<Product>, String> {
        let url = format!("{}/products", self.base_url);
        let client = reqwest::Client::new();

        // ดึงข้อมูลสินค้า โดยไม่ใช้ cache
        match client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
        {
            Ok(response) => {
                if response.status().is_success() {
                    match response.json::<Vec<Product>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse JSON: {}", e)),
                    }
                } else {
                    let status = response.status();
                    let error_text = response.text().await.unwrap_or_default();
                    Err(format!("API error: {} - {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Request error: {}", e)),
        }
    }

    async fn post_product(&self, product: &NewProduct) -> Result<(), String> {
        let url = format!("{}/products", self.base_url);
        let client = reqwest::Client::new();

        match client.post(&url).json(product).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Ok(())
                } else {
                    let error_text = response.text().await.unwrap_or_default();
                    Err(format!("API error: {} - {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Request error: {}", e)),
        }
    }

    async fn delete_product(&self, id: i64) -> Result<(), String> {
        let url = format!("{}/products/{}", self.base_url, id);
        let client = reqwest::Client::new();

        match client.delete(&url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Ok(())
                } else {
                    let error_text = response.text().await.unwrap_or_default();
                    Err(format!("API error: {} - {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Request error: {}", e)),
        }
    }
}
