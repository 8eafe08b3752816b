//! Pretty output formatting.

use catalog_core::product::ProductResponse;

use crate::client::health::Readiness;
use crate::error::ClientError;

/// Format a product for display.
pub fn format_product(product: &ProductResponse) -> String {
    format!(
        "{} (${:.2})\n  ID: {}\n  Stock: {}\n  Description: {}",
        product.name, product.price, product.id, product.stock, product.description
    )
}

/// Format products for display.
pub fn format_products(products: &[ProductResponse]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }
    let mut output = format!("PRODUCTS ({})\n", products.len());
    output.push_str(&"-".repeat(40));
    for product in products {
        output.push_str(&format!("\n{}", format_product(product)));
        output.push('\n');
    }
    output
}

/// Format a readiness report for display.
pub fn format_readiness(readiness: &Readiness) -> String {
    if readiness.ready {
        return "Ready".to_string();
    }
    let mut output = "Not ready".to_string();
    if !readiness.missing_tables.is_empty() {
        output.push_str(&format!(
            "\n  Missing tables: {}",
            readiness.missing_tables.join(", ")
        ));
    }
    if let Some(error) = &readiness.error {
        output.push_str(&format!("\n  Error: {}", error));
    }
    output
}

/// Format a client error, listing field violations one per line.
pub fn format_error(error: &ClientError) -> String {
    match error {
        ClientError::Problem { violations, .. } if !violations.is_empty() => {
            let mut output = format!("Error: {}", error);
            for violation in violations {
                output.push_str(&format!("\n  - {}", violation));
            }
            output
        }
        _ => format!("Error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::validation::Violation;
    use uuid::Uuid;

    fn widget() -> ProductResponse {
        ProductResponse {
            id: Uuid::nil(),
            name: "Widget".to_string(),
            price: 9.5,
            description: "A widget".to_string(),
            stock: 3,
        }
    }

    #[test]
    fn test_format_product() {
        assert_eq!(
            format_product(&widget()),
            "Widget ($9.50)\n  ID: 00000000-0000-0000-0000-000000000000\n  Stock: 3\n  Description: A widget"
        );
    }

    #[test]
    fn test_format_products() {
        assert_eq!(format_products(&[]), "No products found.");

        let output = format_products(&[widget(), widget()]);
        assert!(output.starts_with("PRODUCTS (2)\n----"));
        assert_eq!(output.matches("Widget ($9.50)").count(), 2);
    }

    #[test]
    fn test_format_readiness() {
        let not_ready = Readiness {
            ready: false,
            missing_tables: vec!["ProductTable".to_string()],
            error: None,
        };

        assert_eq!(
            format_readiness(&not_ready),
            "Not ready\n  Missing tables: ProductTable"
        );
    }

    #[test]
    fn test_format_error_lists_violations() {
        let error = ClientError::Problem {
            status: 400,
            detail: "Validation failed".to_string(),
            violations: vec![Violation::new("price", "Price must be greater than 0")],
        };

        assert_eq!(
            format_error(&error),
            "Error: Server returned 400: Validation failed\n  - price: Price must be greater than 0"
        );
    }
}
