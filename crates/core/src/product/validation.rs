//! Product validation rules.

use uuid::Uuid;

use crate::validation::{Validator, Violation};

use super::{Product, ProductRequest};

/// Largest accepted price, the upper bound of a 96-bit decimal
/// (79228162514264337593543950335). Keeps the stored number inside the range
/// and precision DynamoDB accepts.
pub const MAX_PRICE: f64 = 7.922_816_251_426_434e28;

/// Prices below this round to zero at 28 decimal places.
const MIN_PRICE: f64 = 1e-28;

fn check_price(price: f64, violations: &mut Vec<Violation>) {
    if !(price.is_finite() && price >= MIN_PRICE) {
        violations.push(Violation::new("price", "Price must be greater than 0"));
    } else if price > MAX_PRICE {
        violations.push(Violation::new("price", "Price is too large"));
    }
}

/// Validates a product before it is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductValidator;

impl Validator<Product> for ProductValidator {
    fn validate(&self, product: &Product) -> Vec<Violation> {
        let mut violations = Vec::new();
        if product.id == Uuid::nil() {
            violations.push(Violation::new("id", "Id is required"));
        }
        if product.name.trim().is_empty() {
            violations.push(Violation::new("name", "Name is required"));
        }
        check_price(product.price, &mut violations);
        if product.description.trim().is_empty() {
            violations.push(Violation::new("description", "Description is required"));
        }
        if product.stock < 0 {
            violations.push(Violation::new("stock", "Stock cannot be negative"));
        }
        violations
    }
}

/// Validates an incoming create or update payload.
pub fn validate_product_request(request: &ProductRequest) -> Vec<Violation> {
    let mut violations = Vec::new();
    if request.name.trim().is_empty() {
        violations.push(Violation::new("name", "Name is required"));
    }
    check_price(request.price, &mut violations);
    if request.stock < 0 {
        violations.push(Violation::new("stock", "Stock cannot be negative"));
    }
    if request.description.trim().is_empty() {
        violations.push(Violation::new("description", "Description is required"));
    }
    violations
}
