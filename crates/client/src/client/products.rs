//! Product API operations.

use catalog_core::product::{ProductRequest, ProductResponse};
use uuid::Uuid;

use super::CatalogClient;
use crate::error::Result;

impl CatalogClient {
    /// List all products.
    pub async fn list_products(&self) -> Result<Vec<ProductResponse>> {
        let response = self.client.get(self.url("/api/products")).send().await?;
        self.handle_response(response).await
    }

    /// Get product by ID.
    pub async fn get_product(&self, id: Uuid) -> Result<ProductResponse> {
        let response = self
            .client
            .get(self.url(&format!("/api/products/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new product. The server assigns the ID.
    pub async fn create_product(&self, req: &ProductRequest) -> Result<ProductResponse> {
        let response = self
            .client
            .post(self.url("/api/products"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace every field of an existing product.
    pub async fn update_product(&self, id: Uuid, req: &ProductRequest) -> Result<ProductResponse> {
        let response = self
            .client
            .put(self.url(&format!("/api/products/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete product by ID.
    pub async fn delete_product(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/products/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
