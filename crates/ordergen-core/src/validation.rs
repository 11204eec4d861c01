use crate::catalog::{is_known_locality, product_by_id};
use crate::error::{Error, Result};
use crate::model::{Address, Order, OrderLine};
use crate::{
    COUNTRY, CURRENCY, MAX_ORDER_LINES, MAX_QUANTITY, MIN_ORDER_LINES, MIN_QUANTITY, TAX_RATE,
};

/// Validate the record invariants of a generated order.
///
/// This checks:
/// - line count bounds and gap-free 1-based line numbering
/// - every line carries one catalog product tuple, unmixed
/// - fixed currency, tax rate and discount rule
/// - customer id, street, postal code and phone formats
/// - billing and shipping addresses describe the same person and locality
pub fn validate_order(order: &Order) -> Result<()> {
    let lines = order.order_lines.len();
    if !(MIN_ORDER_LINES..=MAX_ORDER_LINES).contains(&lines) {
        return Err(Error::InvalidOrder(format!(
            "order {} has {lines} lines, expected {MIN_ORDER_LINES}..={MAX_ORDER_LINES}",
            order.external_order_id
        )));
    }

    if !is_customer_id(&order.customer_id) {
        return Err(Error::InvalidOrder(format!(
            "customer id {} does not match CUST-NNNNN",
            order.customer_id
        )));
    }

    validate_address(&order.billing_address)?;

    for (index, line) in order.order_lines.iter().enumerate() {
        let expected = index + 1;
        if line.line_number as usize != expected {
            return Err(Error::InvalidOrder(format!(
                "line at position {expected} is numbered {}",
                line.line_number
            )));
        }
        validate_line(line)?;
        validate_address(&line.shipping_address)?;
        ensure_same_identity(&order.billing_address, &line.shipping_address, line)?;
    }

    Ok(())
}

fn validate_line(line: &OrderLine) -> Result<()> {
    let product = product_by_id(line.item_id).ok_or_else(|| {
        Error::InvalidOrder(format!(
            "line {} references unknown item {}",
            line.line_number, line.item_id
        ))
    })?;

    if product.name != line.item_name
        || product.description != line.item_description
        || product.price != line.unit_price
    {
        return Err(Error::InvalidOrder(format!(
            "line {} mixes fields of different products for item {}",
            line.line_number, line.item_id
        )));
    }

    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&line.quantity) {
        return Err(Error::InvalidOrder(format!(
            "line {} has quantity {}",
            line.line_number, line.quantity
        )));
    }

    if line.currency != CURRENCY || line.tax_rate != TAX_RATE {
        return Err(Error::InvalidOrder(format!(
            "line {} has currency {} and tax rate {}",
            line.line_number, line.currency, line.tax_rate
        )));
    }

    if let Some(discount) = line.discount_amount
        && discount != product.discount_amount()
    {
        return Err(Error::InvalidOrder(format!(
            "line {} has discount {discount}, expected {}",
            line.line_number,
            product.discount_amount()
        )));
    }

    Ok(())
}

fn validate_address(address: &Address) -> Result<()> {
    if address.address_line2.is_some() {
        return Err(Error::InvalidAddress(format!(
            "unexpected second address line for {}",
            address.full_name
        )));
    }
    if address.country != COUNTRY {
        return Err(Error::InvalidAddress(format!(
            "unexpected country {}",
            address.country
        )));
    }
    if !is_known_locality(&address.city, &address.state_province) {
        return Err(Error::InvalidAddress(format!(
            "{}, {} is not a known city/state pair",
            address.city, address.state_province
        )));
    }
    if !street_number(&address.address_line1).is_some_and(|n| (1..=999).contains(&n)) {
        return Err(Error::InvalidAddress(format!(
            "address line {:?} is not a street number in 1..=999 on Main Street",
            address.address_line1
        )));
    }
    if address.postal_code.len() != 5
        || !address
            .postal_code
            .parse::<u32>()
            .is_ok_and(|code| (10000..=99999).contains(&code))
    {
        return Err(Error::InvalidAddress(format!(
            "postal code {} is not in 10000..=99999",
            address.postal_code
        )));
    }
    if !is_phone_number(&address.phone_number) {
        return Err(Error::InvalidAddress(format!(
            "phone number {} does not match +1-NNN-555-NNNN",
            address.phone_number
        )));
    }
    Ok(())
}

fn street_number(line: &str) -> Option<u32> {
    let digits = line.strip_suffix(" Main Street")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `+1-{100..=999}-555-{1000..=9999}`
fn is_phone_number(phone: &str) -> bool {
    let Some(rest) = phone.strip_prefix("+1-") else {
        return false;
    };
    let parts: Vec<&str> = rest.split('-').collect();
    let [area, exchange, line] = parts.as_slice() else {
        return false;
    };
    *exchange == "555"
        && bounded_digits(area, 3, 100..=999)
        && bounded_digits(line, 4, 1000..=9999)
}

fn bounded_digits(value: &str, width: usize, range: std::ops::RangeInclusive<u32>) -> bool {
    value.len() == width
        && value.chars().all(|c| c.is_ascii_digit())
        && value.parse::<u32>().is_ok_and(|n| range.contains(&n))
}

/// `CUST-` followed by a zero-padded id in 1..=10000.
fn is_customer_id(customer_id: &str) -> bool {
    customer_id
        .strip_prefix("CUST-")
        .is_some_and(|digits| bounded_digits(digits, 5, 1..=10000))
}

fn ensure_same_identity(billing: &Address, shipping: &Address, line: &OrderLine) -> Result<()> {
    if billing.full_name != shipping.full_name
        || billing.email != shipping.email
        || billing.city != shipping.city
        || billing.state_province != shipping.state_province
    {
        return Err(Error::InvalidAddress(format!(
            "shipping address of line {} belongs to {} <{}>, billing to {} <{}>",
            line.line_number, shipping.full_name, shipping.email, billing.full_name, billing.email
        )));
    }
    Ok(())
}
