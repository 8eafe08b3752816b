mod mock_data;
mod repository;
mod requests;
mod types;
mod validation;

pub use mock_data::generate_seed_products;
pub use repository::ProductRepository;
pub use requests::{ProductRequest, ProductResponse};
pub use types::Product;
pub use validation::{validate_product_request, ProductValidator, MAX_PRICE};
