//! Product CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use catalog_core::product::{validate_product_request, Product, ProductRequest, ProductResponse};
use catalog_core::storage::RepositoryError;

use crate::{
    handlers::{error::RequestError, AppError},
    state::AppState,
};

/// Unwraps the JSON body and applies the request rules.
fn parse_body(
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ProductRequest, AppError> {
    let Json(request) = payload.map_err(|e| RequestError::InvalidBody(e.body_text()))?;

    let violations = validate_product_request(&request);
    if !violations.is_empty() {
        return Err(RepositoryError::ValidationFailed { violations }.into());
    }
    Ok(request)
}

/// Unwraps the product id from the path.
fn parse_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    let Path(id) = path.map_err(|e| RequestError::InvalidPath(e.body_text()))?;
    Ok(id)
}

/// List all products (GET /api/products).
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.products.get_all().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Get a single product (GET /api/products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(path)?;
    let product = state
        .products
        .get(&id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Product", id))?;
    Ok(Json(ProductResponse::from(product)))
}

/// Create a product (POST /api/products).
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_body(payload)?;
    let product = request.into_product(Uuid::new_v4());

    state.products.add(&product).await?;

    tracing::info!(product_id = %product.id, name = %product.name, "Created product");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/products/{}", product.id))],
        Json(ProductResponse::from(product)),
    ))
}

/// Replace a product's fields (PUT /api/products/{id}).
///
/// The product must already exist.
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(path)?;
    let request = parse_body(payload)?;

    let mut product: Product = state
        .products
        .get(&id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Product", id))?;
    request.apply_to(&mut product);

    state.products.update(&product).await?;

    tracing::info!(product_id = %id, "Updated product");
    Ok(Json(ProductResponse::from(product)))
}

/// Delete a product (DELETE /api/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(path)?;
    state.products.delete(&id).await?;

    tracing::info!(product_id = %id, "Deleted product");
    Ok(StatusCode::NO_CONTENT)
}
