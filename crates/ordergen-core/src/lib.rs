//! Core contracts for ordergen.
//!
//! This crate defines the synthetic order record, its JSON wire format, the
//! fixed reference tables records are drawn from, and the invariant checks
//! shared by the generator tests and downstream consumers.

pub mod catalog;
pub mod error;
pub mod model;
pub mod validation;

pub use catalog::{FIRST_NAMES, LAST_NAMES, LOCALITIES, Locality, PRODUCTS, Product};
pub use error::{Error, Result};
pub use model::{Address, Channel, FulfillmentType, Order, OrderLine, OrderType};
pub use validation::validate_order;

/// Currency code stamped on every order line.
pub const CURRENCY: &str = "USD";
/// Tax rate stamped on every order line.
pub const TAX_RATE: f64 = 0.08;
/// Country stamped on every address.
pub const COUNTRY: &str = "USA";
/// Share of the unit price granted when a line carries a discount.
pub const DISCOUNT_RATE: f64 = 0.1;
/// Bounds on the number of lines in one order.
pub const MIN_ORDER_LINES: usize = 1;
pub const MAX_ORDER_LINES: usize = 3;
/// Bounds on the quantity of one order line.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 3;
