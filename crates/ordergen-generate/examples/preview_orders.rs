use std::env;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ordergen_generate::generate_order;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let count: u64 = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(2);
    let seed: u64 = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(42);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for number in 1..=count {
        let order = generate_order(number, Utc::now(), &mut rng);
        println!("{}", serde_json::to_string_pretty(&order)?);
    }
    Ok(())
}
