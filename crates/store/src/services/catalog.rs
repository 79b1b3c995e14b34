//! Catalog accessor.
//!
//! The catalog is a fixed, in-memory product list: defined at build time,
//! immutable at runtime. Lookups are linear scans, which is the right tool
//! at this size. Filtering, sorting, and search live in presentation code on
//! top of [`CatalogService::products`].

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use shoplite_core::ProductId;

use crate::models::Product;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the given ID.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// Catalog accessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    /// Create a catalog accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The full product list, unfiltered. Repeated calls return the same
    /// set.
    #[must_use]
    pub fn products(&self) -> &'static [Product] {
        &CATALOG
    }

    /// Look up a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has the given ID.
    pub fn product(&self, id: ProductId) -> Result<&'static Product, CatalogError> {
        CATALOG
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Distinct category names, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for product in CATALOG.iter() {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }
}

fn listed(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn product(
    id: i32,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    stock_quantity: u32,
    image_url: &str,
    created_at: DateTime<Utc>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Decimal::from(price),
        category: category.to_owned(),
        stock_quantity,
        image_url: image_url.to_owned(),
        is_active: true,
        created_at,
    }
}

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        product(
            1,
            "iPhone 15 Pro",
            "A17 Pro chip, titanium body, 6.1\" Super Retina XDR display",
            7999,
            "phones",
            50,
            "https://images.example.com/products/iphone-15-pro.jpg",
            listed(2024, 1, 15, 10),
        ),
        product(
            2,
            "Samsung Galaxy S24 Ultra",
            "Flagship Android phone with S Pen, AI photography, titanium frame",
            8999,
            "phones",
            35,
            "https://images.example.com/products/galaxy-s24-ultra.jpg",
            listed(2024, 1, 14, 15),
        ),
        product(
            3,
            "Xiaomi 14 Pro",
            "Leica imaging system, Snapdragon 8 Gen 3, 2K curved display",
            4999,
            "phones",
            60,
            "https://images.example.com/products/xiaomi-14-pro.jpg",
            listed(2024, 1, 13, 9),
        ),
        product(
            4,
            "MacBook Air M3",
            "Ultralight laptop, M3 chip, 13\" Retina display, 18-hour battery",
            8999,
            "laptops",
            30,
            "https://images.example.com/products/macbook-air-m3.jpg",
            listed(2024, 1, 11, 11),
        ),
        product(
            5,
            "MacBook Pro 16\"",
            "Professional laptop, M3 Pro chip, Liquid Retina XDR display",
            19999,
            "laptops",
            15,
            "https://images.example.com/products/macbook-pro-16.jpg",
            listed(2024, 1, 10, 16),
        ),
        product(
            6,
            "Dell XPS 13",
            "Ultrabook with Intel Core i7 and a 13.4\" 4K display",
            7999,
            "laptops",
            40,
            "https://images.example.com/products/dell-xps-13.jpg",
            listed(2024, 1, 9, 14),
        ),
        product(
            7,
            "AirPods Pro 2",
            "Active noise cancellation, adaptive transparency, USB-C case",
            1899,
            "audio",
            100,
            "https://images.example.com/products/airpods-pro-2.jpg",
            listed(2024, 1, 8, 10),
        ),
        product(
            8,
            "Sony WH-1000XM5",
            "Over-ear wireless headphones with industry-leading noise cancelling",
            2399,
            "audio",
            45,
            "https://images.example.com/products/sony-wh-1000xm5.jpg",
            listed(2024, 1, 7, 13),
        ),
        product(
            9,
            "Apple Watch Series 9",
            "S9 chip, double-tap gesture, always-on Retina display",
            2999,
            "wearables",
            70,
            "https://images.example.com/products/apple-watch-s9.jpg",
            listed(2024, 1, 6, 9),
        ),
        product(
            10,
            "iPad Air",
            "M2 chip, 10.9\" Liquid Retina display, Apple Pencil support",
            4799,
            "tablets",
            55,
            "https://images.example.com/products/ipad-air.jpg",
            listed(2024, 1, 5, 15),
        ),
        product(
            11,
            "Logitech MX Master 3S",
            "Quiet-click ergonomic mouse with MagSpeed scrolling",
            699,
            "accessories",
            120,
            "https://images.example.com/products/mx-master-3s.jpg",
            listed(2024, 1, 4, 12),
        ),
        product(
            12,
            "Anker 737 Power Bank",
            "24,000 mAh portable charger with 140W two-way fast charging",
            999,
            "accessories",
            80,
            "https://images.example.com/products/anker-737.jpg",
            listed(2024, 1, 3, 10),
        ),
    ]
});
