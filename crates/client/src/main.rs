//! catalog-client CLI entry point.

use catalog_client::cli::{Cli, Commands, OutputFormat};
use catalog_client::client::CatalogClient;
use catalog_client::output::{format_output, pretty};
use catalog_client::ClientError;
use catalog_core::product::ProductRequest;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", pretty::format_error(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let client = CatalogClient::new(&cli.base_url);

    match cli.command {
        Commands::Products(products_cmd) => {
            use catalog_client::cli::products::ProductsAction;
            match products_cmd.action {
                ProductsAction::List => {
                    let products = client.list_products().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&products, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_products(&products)),
                    }
                }
                ProductsAction::Create {
                    name,
                    price,
                    description,
                    stock,
                } => {
                    let product = client
                        .create_product(&ProductRequest::new(name, price, description, stock))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_product(&product))
                        }
                    }
                }
                ProductsAction::Get { id } => {
                    let product = client.get_product(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_product(&product)),
                    }
                }
                ProductsAction::Update {
                    id,
                    name,
                    price,
                    description,
                    stock,
                } => {
                    // PUT replaces every field, so fill the gaps from the current product.
                    let current = client.get_product(id).await?;
                    let request = ProductRequest::new(
                        name.unwrap_or(current.name),
                        price.unwrap_or(current.price),
                        description.unwrap_or(current.description),
                        stock.unwrap_or(current.stock),
                    );
                    let product = client.update_product(id, &request).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_product(&product))
                        }
                    }
                }
                ProductsAction::Delete { id } => {
                    client.delete_product(id).await?;
                    if !cli.quiet {
                        println!("Deleted product {}", id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use catalog_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("Live");
                    }
                }
                HealthAction::Ready => {
                    let readiness = client.readyz().await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&readiness, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_readiness(&readiness))
                        }
                    }
                    if !readiness.ready {
                        std::process::exit(2);
                    }
                }
            }
        }
    }

    Ok(())
}
