//! API request and response types for product operations.
//!
//! Shared between the server and client. Pure data, no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// Request payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
}

impl ProductRequest {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            stock,
        }
    }

    /// Convert into a product with the given ID.
    pub fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            stock: self.stock,
        }
    }

    /// Copy every field onto an existing product. The ID is left untouched.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.price = self.price;
        product.description = self.description;
        product.stock = self.stock;
    }
}

/// Product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            stock: product.stock,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            stock: product.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_keeps_id() {
        let mut product = Product::new("Old", 1.0, "Old description", 1);
        let id = product.id;

        ProductRequest::new("New", 2.5, "New description", 7).apply_to(&mut product);

        assert_eq!(product.id, id);
        assert_eq!(product.name, "New");
        assert_eq!(product.price, 2.5);
        assert_eq!(product.stock, 7);
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"name":"Widget","price":9.99,"description":"A widget","stock":3}"#,
        )
        .unwrap();

        let id = Uuid::new_v4();
        let product = request.into_product(id);

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn test_response_from_product() {
        let product = Product::new("Widget", 9.99, "A widget", 3);

        let response = ProductResponse::from(&product);

        assert_eq!(response.id, product.id);
        assert_eq!(response.stock, 3);
    }
}
