//! 組み込みのモック商品データ

use super::Product;

const MOCK_PRODUCTS: &[(u64, &str, &str, f64)] = &[
    (1, "Smartphone", "Electronics", 500.0),
    (2, "Laptop", "Electronics", 1000.0),
    (3, "Shirt", "Clothing", 50.0),
    (4, "Shoes", "Clothing", 80.0),
    (5, "Makeup Kit", "Beauty & Health", 30.0),
    (6, "Dumbbells", "Sports", 120.0),
    (7, "Sofa", "Furniture", 700.0),
    (8, "Watch", "Accessories", 200.0),
    (9, "Headphones", "Electronics", 150.0),
    (10, "Jacket", "Clothing", 100.0),
    (11, "Perfume", "Beauty & Health", 60.0),
    (12, "Basketball", "Sports", 25.0),
    (13, "Dining Table", "Furniture", 800.0),
    (14, "Necklace", "Accessories", 300.0),
    (15, "Tablet", "Electronics", 400.0),
    (16, "Trousers", "Clothing", 70.0),
    (17, "Lipstick", "Beauty & Health", 20.0),
    (18, "Tennis Racket", "Sports", 150.0),
    (19, "Bed", "Furniture", 1000.0),
    (20, "Bracelet", "Accessories", 250.0),
    (21, "Camera", "Electronics", 600.0),
    (22, "Sweater", "Clothing", 90.0),
    (23, "Face Cream", "Beauty & Health", 40.0),
    (24, "Football", "Sports", 30.0),
    (25, "Bookshelf", "Furniture", 150.0),
    (26, "Earrings", "Accessories", 100.0),
    (27, "Monitor", "Electronics", 300.0),
    (28, "Dress", "Clothing", 120.0),
    (29, "Shampoo", "Beauty & Health", 15.0),
    (30, "Yoga Mat", "Sports", 50.0),
    (31, "Chair", "Furniture", 200.0),
    (32, "Ring", "Accessories", 400.0),
    (33, "Television", "Electronics", 800.0),
    (34, "Skirt", "Clothing", 60.0),
    (35, "Body Lotion", "Beauty & Health", 25.0),
    (36, "Golf Clubs", "Sports", 500.0),
    (37, "Wardrobe", "Furniture", 1200.0),
    (38, "Sunglasses", "Accessories", 150.0),
    (39, "Printer", "Electronics", 200.0),
    (40, "Blouse", "Clothing", 70.0),
];

pub(super) fn products() -> Vec<Product> {
    MOCK_PRODUCTS
        .iter()
        .map(|&(id, title, category, price)| Product::new(id, title, category, price))
        .collect()
}
