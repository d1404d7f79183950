//! Seed the database with sample catalog data.
//!
//! Intended for local development. Inserts are keyed on product name with a
//! `WHERE NOT EXISTS` guard, so re-running the command is safe.

use super::CliError;

/// Sample products: (name, description, price, stock, category).
const SAMPLE_PRODUCTS: &[(&str, &str, &str, i32, &str)] = &[
    (
        "Mechanical Keyboard",
        "Tenkeyless, hot-swappable switches",
        "89.99",
        25,
        "Electronics",
    ),
    (
        "USB-C Hub",
        "7-in-1 with HDMI and card reader",
        "34.50",
        60,
        "Electronics",
    ),
    (
        "Espresso Beans 1kg",
        "Medium roast, single origin",
        "18.00",
        120,
        "Grocery",
    ),
    ("Ceramic Mug", "350ml, dishwasher safe", "12.25", 80, "Kitchen"),
    (
        "Field Notebook",
        "A5 dot grid, 120 pages",
        "9.75",
        200,
        "Stationery",
    ),
];

/// Insert sample products.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Seeding {} products...", SAMPLE_PRODUCTS.len());

    for (name, description, price, stock, category) in SAMPLE_PRODUCTS {
        sqlx::query(
            r"
            INSERT INTO products (name, description, price, stock, category)
            SELECT $1, $2, $3::numeric, $4, $5
            WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = $1)
            ",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .bind(category)
        .execute(&pool)
        .await?;
    }

    tracing::info!("Seed complete");

    Ok(())
}
