use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of order, as understood by the downstream order service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Standard,
    Guest,
    Store,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::Standard, OrderType::Guest, OrderType::Store];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Standard => "STANDARD",
            OrderType::Guest => "GUEST",
            OrderType::Store => "STORE",
        }
    }
}

/// Sales channel an order originated from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Web,
    Mobile,
    Api,
    Pos,
    CallCenter,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Web,
        Channel::Mobile,
        Channel::Api,
        Channel::Pos,
        Channel::CallCenter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Web => "WEB",
            Channel::Mobile => "MOBILE",
            Channel::Api => "API",
            Channel::Pos => "POS",
            Channel::CallCenter => "CALL_CENTER",
        }
    }
}

/// Delivery method of a single order line.
///
/// `STH` ships to the customer's home, `BOPS` is bought online and picked up
/// in store, `STS` ships to a store for collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FulfillmentType {
    Sth,
    Bops,
    Sts,
}

impl FulfillmentType {
    pub const ALL: [FulfillmentType; 3] = [
        FulfillmentType::Sth,
        FulfillmentType::Bops,
        FulfillmentType::Sts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FulfillmentType::Sth => "STH",
            FulfillmentType::Bops => "BOPS",
            FulfillmentType::Sts => "STS",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FulfillmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address used for both billing and shipping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub full_name: String,
    pub address_line1: String,
    /// Always `null` on generated records; kept for shape compatibility.
    pub address_line2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub phone_number: String,
    pub email: String,
}

/// One purchased item within an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// 1-based position of the line within its order.
    pub line_number: u32,
    pub item_id: u64,
    pub item_name: String,
    pub item_description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub currency: String,
    pub tax_rate: f64,
    pub discount_amount: Option<f64>,
    pub fulfillment_type: FulfillmentType,
    #[serde(with = "date_format")]
    pub estimated_ship_date: NaiveDate,
    #[serde(with = "date_format")]
    pub estimated_delivery_date: NaiveDate,
    pub shipping_address: Address,
}

/// A synthetic order event, serialized as one line of compact JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub external_order_id: Uuid,
    pub customer_id: String,
    pub order_type: OrderType,
    pub channel: Channel,
    pub order_lines: Vec<OrderLine>,
    pub billing_address: Address,
    pub notes: String,
    /// UTC instant at second precision, rendered without an offset.
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Derive the contact email of a person from their name.
pub fn email_for(first_name: &str, last_name: &str) -> String {
    format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

/// Round a monetary amount to cents.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercase_first_dot_last() {
        assert_eq!(email_for("Jane", "Martinez"), "jane.martinez@example.com");
    }

    #[test]
    fn round_currency_keeps_two_decimals() {
        assert_eq!(round_currency(24.999000000000002), 25.0);
        assert_eq!(round_currency(1.999), 2.0);
        assert_eq!(round_currency(7.8), 7.8);
    }

    #[test]
    fn enums_use_wire_names() {
        let json = serde_json::to_string(&Channel::CallCenter).expect("serialize channel");
        assert_eq!(json, "\"CALL_CENTER\"");
        let json = serde_json::to_string(&FulfillmentType::Bops).expect("serialize fulfillment");
        assert_eq!(json, "\"BOPS\"");
        for order_type in OrderType::ALL {
            let json = serde_json::to_string(&order_type).expect("serialize order type");
            assert_eq!(json, format!("\"{order_type}\""));
        }
    }
}
