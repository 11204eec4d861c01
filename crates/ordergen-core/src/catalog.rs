//! Fixed reference tables that every generated order samples from.

use crate::DISCOUNT_RATE;
use crate::model::round_currency;

/// A sellable product. Id, name, price and description always travel together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
}

impl Product {
    /// Discount granted on this product when a line is discounted.
    pub fn discount_amount(&self) -> f64 {
        round_currency(self.price * DISCOUNT_RATE)
    }
}

/// A city paired with the state it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locality {
    pub city: &'static str,
    pub state: &'static str,
}

pub static FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa", "William", "Jennifer",
];

pub static LAST_NAMES: [&str; 10] = [
    "Doe", "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Martinez",
];

pub static LOCALITIES: [Locality; 10] = [
    Locality { city: "San Francisco", state: "CA" },
    Locality { city: "New York", state: "NY" },
    Locality { city: "Los Angeles", state: "CA" },
    Locality { city: "Chicago", state: "IL" },
    Locality { city: "Seattle", state: "WA" },
    Locality { city: "Portland", state: "OR" },
    Locality { city: "Austin", state: "TX" },
    Locality { city: "Denver", state: "CO" },
    Locality { city: "Boston", state: "MA" },
    Locality { city: "Miami", state: "FL" },
];

pub static PRODUCTS: [Product; 15] = [
    Product {
        id: 1000000001,
        name: "Apple AirPods Pro 2nd Gen",
        price: 249.99,
        description: "Wireless earbuds with active noise cancellation",
    },
    Product {
        id: 1000000002,
        name: "Sony WH-1000XM5 Headphones",
        price: 349.99,
        description: "Premium wireless noise-canceling headphones",
    },
    Product {
        id: 1000000003,
        name: "Anker USB-C Charging Cable 6ft",
        price: 19.99,
        description: "Braided nylon fast charging cable",
    },
    Product {
        id: 1000000004,
        name: "Nike Air Max 270 Running Shoes",
        price: 159.99,
        description: "Lightweight running shoes with Air Max cushioning",
    },
    Product {
        id: 1000000005,
        name: "Lululemon Yoga Mat 5mm",
        price: 78.00,
        description: "Non-slip yoga mat with alignment lines",
    },
    Product {
        id: 1000000006,
        name: "Kindle Paperwhite 11th Gen",
        price: 149.99,
        description: "E-reader with 6.8 inch display",
    },
    Product {
        id: 1000000007,
        name: "MacBook Pro 16-inch M3 Max",
        price: 3499.00,
        description: "Apple laptop with M3 Max chip",
    },
    Product {
        id: 1000000008,
        name: "Dell UltraSharp 32 4K Monitor",
        price: 899.99,
        description: "32-inch 4K USB-C Hub Monitor",
    },
    Product {
        id: 1000000009,
        name: "Dyson V15 Detect Vacuum",
        price: 749.99,
        description: "Cordless vacuum with laser detection",
    },
    Product {
        id: 1000000010,
        name: "Samsung Galaxy S24 Ultra",
        price: 1299.99,
        description: "Flagship smartphone with S Pen",
    },
    Product {
        id: 1000000011,
        name: "Bose QuietComfort Ultra",
        price: 429.00,
        description: "Premium noise canceling headphones",
    },
    Product {
        id: 1000000012,
        name: "Apple Watch Series 9",
        price: 399.00,
        description: "Smartwatch with health tracking",
    },
    Product {
        id: 1000000013,
        name: "Nintendo Switch OLED",
        price: 349.99,
        description: "Gaming console with OLED screen",
    },
    Product {
        id: 1000000014,
        name: "Instant Pot Duo 7-in-1",
        price: 89.99,
        description: "Multi-use pressure cooker",
    },
    Product {
        id: 1000000015,
        name: "Nespresso VertuoPlus",
        price: 179.00,
        description: "Coffee and espresso machine",
    },
];

/// Look up a product by its item id.
pub fn product_by_id(id: u64) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Whether `city` and `state` form one of the known localities.
pub fn is_known_locality(city: &str, state: &str) -> bool {
    LOCALITIES
        .iter()
        .any(|locality| locality.city == city && locality.state == state)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn product_ids_are_unique_and_sequential() {
        let ids: BTreeSet<u64> = PRODUCTS.iter().map(|product| product.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
        assert_eq!(ids.first(), Some(&1000000001));
        assert_eq!(ids.last(), Some(&1000000015));
    }

    #[test]
    fn discount_is_ten_percent_rounded_to_cents() {
        let airpods = product_by_id(1000000001).expect("airpods");
        assert_eq!(airpods.discount_amount(), 25.0);
        let cable = product_by_id(1000000003).expect("cable");
        assert_eq!(cable.discount_amount(), 2.0);
        let mat = product_by_id(1000000005).expect("yoga mat");
        assert_eq!(mat.discount_amount(), 7.8);
    }

    #[test]
    fn localities_are_joint_pairs() {
        assert!(is_known_locality("Austin", "TX"));
        assert!(is_known_locality("Los Angeles", "CA"));
        assert!(!is_known_locality("Austin", "CA"));
    }
}
