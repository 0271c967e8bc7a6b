//! # Seed Data Generator
//!
//! Populates a database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p shopstock-db --bin seed
//!
//! # Specify database path
//! cargo run -p shopstock-db --bin seed -- --db ./shop.db
//! ```
//!
//! ## Generated Products
//! One product per catalog entry, spread across categories (Kitchen, Office,
//! Home, Electronics, Garden), each with a deterministic price and stock
//! level so repeated runs against a fresh database produce the same data.

use std::env;

use shopstock_core::ProductDraft;
use shopstock_db::{Database, DbConfig};

/// Sample catalog: (name, price, quantity, category)
const CATALOG: &[(&str, f64, i64, &str)] = &[
    ("Kettle", 12.99, 50, "Kitchen"),
    ("Toaster", 24.50, 30, "Kitchen"),
    ("Chef Knife", 34.99, 25, "Kitchen"),
    ("Cutting Board", 9.99, 60, "Kitchen"),
    ("French Press", 18.75, 20, "Kitchen"),
    ("Desk Lamp", 22.50, 15, "Office"),
    ("Notebook", 3.49, 200, "Office"),
    ("Ballpoint Pens 10pk", 4.99, 150, "Office"),
    ("Monitor Stand", 29.99, 18, "Office"),
    ("Stapler", 7.25, 45, "Office"),
    ("Throw Blanket", 19.99, 40, "Home"),
    ("Scented Candle", 8.50, 80, "Home"),
    ("Picture Frame", 6.99, 55, "Home"),
    ("Wall Clock", 15.00, 22, "Home"),
    ("USB-C Cable", 9.49, 120, "Electronics"),
    ("Wireless Mouse", 17.99, 35, "Electronics"),
    ("Power Strip", 13.25, 48, "Electronics"),
    ("Garden Trowel", 7.99, 33, "Garden"),
    ("Watering Can", 11.50, 27, "Garden"),
    ("Plant Pot", 5.25, 90, "Garden"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./shop.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("ShopStock Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./shop.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("ShopStock Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("Connected, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!("Seeding products...");

    let mut seeded = 0;
    for (name, price, quantity, category) in CATALOG {
        let draft = ProductDraft::new(*name, *price, *quantity, Some((*category).to_string()));

        if let Err(e) = db.products().insert(&draft).await {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }

        seeded += 1;
    }

    println!();
    println!("Seeded {} products", seeded);

    Ok(())
}
