//! Quote the token1 requirement for a few deposit shapes against a pool
//! trading at 5000.
//!
//! Run with `cargo run --example quote_deposit`.

use naiad_clmm::prelude::*;

fn main() -> Result<()> {
    let current = Price::new(5000.0)?;
    let shapes = [
        (1.0, 4545.0, 5500.0),
        (1.0, 2000.0, 5500.0),
        (1.0, 4545.0, 10_000.0),
        (0.01, 4545.0, 5500.0),
    ];

    for (amount0, lower, upper) in shapes {
        let request = DepositRequest::new(amount0, lower, upper, 0.5)?;
        let amount1 = quote_deposit(&request, current, FeeTier::Medium)?;
        println!("deposit {amount0} token0 over [{lower}, {upper}] -> {amount1:.2} token1");
    }

    Ok(())
}
