use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Utc};
use rand::{Rng, RngCore};
use uuid::Uuid;

use ordergen_core::model::email_for;
use ordergen_core::{
    Address, COUNTRY, CURRENCY, Channel, FIRST_NAMES, FulfillmentType, LAST_NAMES, LOCALITIES,
    Locality, MAX_ORDER_LINES, MAX_QUANTITY, MIN_ORDER_LINES, MIN_QUANTITY, Order, OrderLine,
    OrderType, PRODUCTS, TAX_RATE,
};

/// Probability that a line carries a discount.
const DISCOUNT_PROBABILITY: f64 = 0.2;
const SHIP_AFTER_DAYS: i64 = 1;
const DELIVER_AFTER_DAYS: i64 = 4;

/// Generate one synthetic order.
///
/// `order_number` only feeds the note text. The buyer and their locality are
/// drawn once and reused for the billing address and every shipping address.
pub fn generate_order<R: Rng + ?Sized>(
    order_number: u64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Order {
    let buyer = Buyer::draw(rng);
    let schedule = Schedule::from_now(now);

    let line_count = rng.random_range(MIN_ORDER_LINES..=MAX_ORDER_LINES);
    let order_lines = (1..=line_count)
        .map(|line_number| generate_line(line_number as u32, &buyer, &schedule, rng))
        .collect();

    Order {
        external_order_id: random_uuid(rng),
        customer_id: format!("CUST-{:05}", rng.random_range(1..=10000)),
        order_type: *pick(&OrderType::ALL, rng),
        channel: *pick(&Channel::ALL, rng),
        order_lines,
        billing_address: buyer.address(rng),
        notes: format!("Order #{order_number} - Generated for testing"),
        timestamp: schedule.placed_at,
    }
}

fn generate_line<R: Rng + ?Sized>(
    line_number: u32,
    buyer: &Buyer,
    schedule: &Schedule,
    rng: &mut R,
) -> OrderLine {
    let product = pick(&PRODUCTS, rng);
    let quantity = rng.random_range(MIN_QUANTITY..=MAX_QUANTITY);
    let discount_amount = rng
        .random_bool(DISCOUNT_PROBABILITY)
        .then(|| product.discount_amount());

    OrderLine {
        line_number,
        item_id: product.id,
        item_name: product.name.to_string(),
        item_description: product.description.to_string(),
        quantity,
        unit_price: product.price,
        currency: CURRENCY.to_string(),
        tax_rate: TAX_RATE,
        discount_amount,
        fulfillment_type: *pick(&FulfillmentType::ALL, rng),
        estimated_ship_date: schedule.ship_date,
        estimated_delivery_date: schedule.delivery_date,
        shipping_address: buyer.address(rng),
    }
}

/// The person an order belongs to.
struct Buyer {
    full_name: String,
    email: String,
    locality: &'static Locality,
}

impl Buyer {
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first_name = *pick(&FIRST_NAMES, rng);
        let last_name = *pick(&LAST_NAMES, rng);
        Self {
            full_name: format!("{first_name} {last_name}"),
            email: email_for(first_name, last_name),
            locality: pick(&LOCALITIES, rng),
        }
    }

    /// Street, postal code and phone digits vary per address; name, email,
    /// city and state never do.
    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> Address {
        Address {
            full_name: self.full_name.clone(),
            address_line1: format!("{} Main Street", rng.random_range(1..=999)),
            address_line2: None,
            city: self.locality.city.to_string(),
            state_province: self.locality.state.to_string(),
            postal_code: rng.random_range(10000..=99999).to_string(),
            country: COUNTRY.to_string(),
            phone_number: format!(
                "+1-{}-555-{}",
                rng.random_range(100..=999),
                rng.random_range(1000..=9999)
            ),
            email: self.email.clone(),
        }
    }
}

/// Time points shared by every line of one order.
struct Schedule {
    placed_at: chrono::NaiveDateTime,
    ship_date: NaiveDate,
    delivery_date: NaiveDate,
}

impl Schedule {
    fn from_now(now: DateTime<Utc>) -> Self {
        Self {
            placed_at: now.naive_utc().trunc_subsecs(0),
            ship_date: (now + Duration::days(SHIP_AFTER_DAYS)).date_naive(),
            delivery_date: (now + Duration::days(DELIVER_AFTER_DAYS)).date_naive(),
        }
    }
}

fn pick<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

fn random_uuid<R: RngCore + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}
