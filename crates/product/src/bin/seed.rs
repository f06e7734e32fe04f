//! Populates the products table with a few demo rows for local development.
//!
//! ```bash
//! cargo run -p product --bin seed
//! ```
//!
//! Names that already exist are left alone, so the binary can be re-run.

use anyhow::{Context, Result};
use product::{domain::requests::product::CreateProductRequest, state::AppState};
use rust_decimal::Decimal;
use shared::{config::Config, utils::init_logger};
use tracing::info;

const DEMO_PRODUCTS: &[(&str, i64, i32)] = &[
    ("Mechanical Keyboard", 8999, 25),
    ("Wireless Mouse", 2499, 60),
    ("27\" Monitor", 24900, 12),
    ("USB-C Hub", 3450, 40),
    ("Laptop Stand", 1999, 0),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("product-seed", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;
    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    let products = &state.di_container.product_repository;

    let mut created = 0;
    for (name, cents, quantity) in DEMO_PRODUCTS {
        if products.find_by_name(name).await?.is_some() {
            info!("⏭️ Skipping existing product {}", name);
            continue;
        }

        let req = CreateProductRequest {
            name: (*name).to_string(),
            price: Decimal::new(*cents, 2),
            quantity: *quantity,
        };

        products
            .create(&req)
            .await
            .with_context(|| format!("Failed to seed product {name}"))?;
        created += 1;
    }

    info!("🌱 Seeded {} products", created);

    state.pool.close().await;
    Ok(())
}
