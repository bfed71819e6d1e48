//! Built-in records served when storage holds nothing usable.

use super::{Admin, Localized, Product, Size};

const UNSPLASH: &str = "https://images.unsplash.com/";

fn photo(id: &str) -> String {
    format!("{}{}", UNSPLASH, id)
}

pub fn initial_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: Localized::new("Стул", "Орындық"),
            price: Localized::new(1000_i64, 1200_i64),
            description: Localized::new("Деревянный стул", "Ағаш орындық"),
            material: Localized::new("Дерево", "Ағаш"),
            code: Localized::new("ST123", "OR123"),
            title: Localized::new("Комфортный стул", "Жайлы орындық"),
            size: Size::new(40.0, 90.0, 40.0),
            discount_percent: Localized::new(10_i64, 12_i64),
            discount_price: Localized::new(900_i64, 1056_i64),
            main_image: photo("photo-1503602642458-232111445657"),
            additional_images: vec![
                photo("photo-1592078615290-033ee584e267"),
                photo("photo-1580480055273-228ff5388ef8"),
            ],
        },
        Product {
            id: "2".to_string(),
            name: Localized::new("Стол", "Үстел"),
            price: Localized::new(5000_i64, 5500_i64),
            description: Localized::new("Обеденный стол", "Ас үстелі"),
            material: Localized::new("Дерево", "Ағаш"),
            code: Localized::new("TB456", "US456"),
            title: Localized::new("Современный стол", "Заманауи үстел"),
            size: Size::new(120.0, 75.0, 80.0),
            discount_percent: Localized::new(0_i64, 0_i64),
            discount_price: Localized::new(0_i64, 0_i64),
            main_image: photo("photo-1530018607912-eff2daa1bac4"),
            additional_images: vec![
                photo("photo-1581428982868-e410dd047a90"),
                photo("photo-1604061986761-d9d0cc41b0d1"),
            ],
        },
        Product {
            id: "3".to_string(),
            name: Localized::new("Диван", "Диван"),
            price: Localized::new(8000_i64, 8500_i64),
            description: Localized::new("Мягкий диван", "Жұмсақ диван"),
            material: Localized::new("Ткань", "Мата"),
            code: Localized::new("SF789", "DV789"),
            title: Localized::new("Элегантный диван", "Элегантты диван"),
            size: Size::new(200.0, 85.0, 90.0),
            discount_percent: Localized::new(15_i64, 15_i64),
            discount_price: Localized::new(6800_i64, 7225_i64),
            main_image: photo("photo-1555041469-a586c61ea9bc"),
            additional_images: vec![
                photo("photo-1550254478-ead40cc54513"),
                photo("photo-1540574163026-643ea20ade25"),
            ],
        },
        Product {
            id: "4".to_string(),
            name: Localized::new("Кровать", "Төсек"),
            price: Localized::new(12000_i64, 12500_i64),
            description: Localized::new("Двуспальная кровать", "Екі адамдық төсек"),
            material: Localized::new("Дерево", "Ағаш"),
            code: Localized::new("BD101", "TS101"),
            title: Localized::new("Комфортная кровать", "Жайлы төсек"),
            size: Size::new(160.0, 200.0, 90.0),
            discount_percent: Localized::new(0_i64, 0_i64),
            discount_price: Localized::new(0_i64, 0_i64),
            main_image: photo("photo-1505693416388-ac5ce068fe85"),
            additional_images: vec![
                photo("photo-1522771739844-6a9f6d5f14af"),
                photo("photo-1505693314120-0d443867891c"),
            ],
        },
    ]
}

pub fn initial_admins() -> Vec<Admin> {
    [
        ("1", "admin", "photo-1633332755192-727a05c4013d"),
        ("2", "manager", "photo-1494790108377-be9c29b29330"),
        ("3", "supervisor", "photo-1535713875002-d1d0cf377fde"),
        ("4", "moderator", "photo-1527980965255-d3b416303d12"),
    ]
    .into_iter()
    .map(|(id, username, image)| Admin {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        image: photo(image),
    })
    .collect()
}
