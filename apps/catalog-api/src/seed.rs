//! First-run seed data
//!
//! When the products collection is empty at startup, a fixed starter catalog
//! is inserted so the API is immediately explorable. Seeding constructs
//! entities directly (fixed ids included) and bypasses the HTTP path.

use domain_catalog::{MongoProductRepository, Product};
use mongodb::Database;
use tracing::info;

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    }
}

/// The starter catalog.
pub fn initial_products() -> Vec<Product> {
    vec![
        product("1", "Laptop", "High-performance laptop with 16GB RAM", 1200.0, "electronics", true),
        product("2", "Smartphone", "Latest model with 128GB storage", 800.0, "electronics", true),
        product("3", "Coffee Maker", "Programmable coffee maker with timer", 50.0, "kitchen", false),
        product("4", "Wireless Headphones", "Noise-cancelling over-ear headphones", 199.0, "electronics", true),
        product("5", "Blender", "High-speed professional blender", 89.0, "kitchen", true),
        product("6", "Desk Lamp", "LED adjustable brightness lamp", 35.0, "home", true),
        product("7", "Yoga Mat", "Non-slip eco-friendly mat", 25.0, "fitness", false),
        product("8", "Smart Watch", "Health tracking and notifications", 249.0, "electronics", true),
        product("9", "Cookware Set", "10-piece non-stick kitchen set", 120.0, "kitchen", true),
        product("10", "Novel - \"The Silent Sky\"", "Bestselling fiction book", 14.0, "books", true),
        product("11", "Backpack", "Water-resistant with laptop compartment", 45.0, "accessories", false),
        product("12", "Plant Pot", "Ceramic self-watering planter", 22.0, "home", true),
        product("13", "Gaming Mouse", "RGB customizable buttons", 59.0, "electronics", true),
        product("14", "Denim Jacket", "Classic blue denim jacket", 65.0, "clothing", true),
        product("15", "4K Action Camera", "Waterproof adventure camera", 299.0, "electronics", true),
        product("16", "Suitcase", "Hard-shell spinner luggage", 180.0, "travel", true),
        product("17", "Sci-Fi Movie Collection", "10 classic sci-fi films", 39.0, "movies", false),
        product("18", "Standing Desk", "Height-adjustable workstation", 250.0, "furniture", true),
        product("19", "Air Fryer", "Digital touchscreen air fryer", 99.0, "kitchen", true),
        product("20", "Running Shoes", "Lightweight cushioned shoes", 85.0, "footwear", true),
        product("21", "Graphic Tablet", "Pressure-sensitive drawing tablet", 149.0, "computers", true),
        product("22", "Leather Wallet", "Genuine leather bifold wallet", 45.0, "accessories", true),
        product("23", "Bluetooth Speaker", "Portable waterproof speaker", 79.0, "electronics", false),
        product("24", "Dumbbell Set", "Adjustable weight set", 120.0, "fitness", true),
        product("25", "Cotton T-Shirt", "Organic cotton crew neck", 22.0, "clothing", true),
        product("26", "External SSD", "1TB portable solid state drive", 129.0, "computers", true),
        product("27", "Cookbook", "100 vegetarian recipes", 18.0, "books", true),
        product("28", "Puzzle Game", "3D wooden brain teaser", 15.0, "toys", true),
        product("29", "Sunglasses", "UV protection polarized lenses", 55.0, "accessories", false),
        product("30", "Desk Organizer", "Multi-compartment storage", 28.0, "office", true),
    ]
}

/// Insert the starter catalog if the collection holds no documents yet.
pub async fn seed_if_empty(db: &Database) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(db);

    if repository.is_empty().await? {
        let products = initial_products();
        repository.insert_many(&products).await?;
        info!("Seeded {} initial products", products.len());
    }

    Ok(())
}
