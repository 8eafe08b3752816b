//! Seed data generation.
//!
//! Pure functions producing valid products for tests and database seeding.

use super::Product;

const NAMES: &[&str] = &[
    "Widget", "Gadget", "Sprocket", "Gizmo", "Doohickey", "Flange", "Bracket", "Coupler",
];

const ADJECTIVES: &[&str] = &["Compact", "Heavy-duty", "Deluxe", "Basic", "Premium", "Mini"];

/// Generate `count` valid products with deterministic names, prices and stock.
///
/// # Example
///
/// ```
/// use catalog_core::product::{generate_seed_products, ProductValidator};
/// use catalog_core::validation::Validator;
///
/// let products = generate_seed_products(12);
///
/// assert_eq!(products.len(), 12);
/// assert!(products.iter().all(|p| ProductValidator.validate(p).is_empty()));
/// ```
pub fn generate_seed_products(count: u32) -> Vec<Product> {
    (0..count as usize)
        .map(|i| {
            let adjective = ADJECTIVES[i % ADJECTIVES.len()];
            let noun = NAMES[i % NAMES.len()];
            let name = format!("{} {}", adjective, noun);
            let price = ((i % 20) as f64 + 1.0) * 2.5 - 0.01;
            let stock = ((i * 7) % 50) as i64;
            let description = format!("{} for everyday use", name);
            Product::new(name, price, description, stock)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_count() {
        assert!(generate_seed_products(0).is_empty());
        assert_eq!(generate_seed_products(30).len(), 30);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let products = generate_seed_products(25);
        let mut ids: Vec<_> = products.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_prices_are_positive() {
        assert!(generate_seed_products(40).iter().all(|p| p.price > 0.0));
    }
}
