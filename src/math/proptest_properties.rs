//! Property-based checks for the conversion and liquidity helpers.

use alloy_primitives::U256;
use proptest::prelude::*;

use crate::domain::{Amount, Liquidity, Price, Tick};
use crate::math::{
    amounts_for_liquidity, liquidity_for_amounts, mul_div, nearest_usable_tick,
    price_to_sqrt_price_x96, sqrt_price_x96_to_price, tick_at_sqrt_price, tick_to_sqrt_price_x96,
};

fn arb_tick() -> impl Strategy<Value = Tick> {
    (Tick::MIN.get()..=Tick::MAX.get()).prop_map(|raw| {
        let Ok(tick) = Tick::new(raw) else {
            panic!("strategy stays in range");
        };
        tick
    })
}

fn arb_spacing() -> impl Strategy<Value = u16> {
    prop_oneof![Just(10u16), Just(60u16), Just(200u16)]
}

fn arb_price() -> impl Strategy<Value = Price> {
    (1e-6f64..1e12).prop_map(|raw| {
        let Ok(price) = Price::new(raw) else {
            panic!("strategy stays positive and finite");
        };
        price
    })
}

proptest! {
    // -- nearest_usable_tick ------------------------------------------------

    #[test]
    fn snapped_tick_is_on_the_grid(tick in arb_tick(), spacing in arb_spacing()) {
        let Ok(snapped) = nearest_usable_tick(tick, spacing) else {
            panic!("expected Ok");
        };
        prop_assert!(snapped.is_usable(spacing));
        prop_assert!(snapped.get() >= Tick::MIN.get());
        prop_assert!(snapped.get() <= Tick::MAX.get());
    }

    #[test]
    fn snapped_tick_stays_close(tick in arb_tick(), spacing in arb_spacing()) {
        let Ok(snapped) = nearest_usable_tick(tick, spacing) else {
            panic!("expected Ok");
        };
        // Nearest multiple is at most half a step away; the inward clamp
        // at the extremes can add one more full step.
        let distance = (snapped.get() - tick.get()).abs();
        prop_assert!(distance <= i32::from(spacing) + i32::from(spacing) / 2);
    }

    #[test]
    fn exact_midpoints_snap_upward(step in 1i32..4_000, spacing in arb_spacing()) {
        // Only even spacings have an exact integer midpoint; all three
        // supported spacings are even.
        let s = i32::from(spacing);
        let Ok(midpoint) = Tick::new(step * s + s / 2) else {
            panic!("stays in range");
        };
        let Ok(snapped) = nearest_usable_tick(midpoint, spacing) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(snapped.get(), (step + 1) * s);
    }

    // -- price ⇄ sqrt price ⇄ tick round trips ------------------------------

    #[test]
    fn price_survives_the_x96_round_trip(price in arb_price()) {
        let Ok(encoded) = price_to_sqrt_price_x96(price) else {
            panic!("expected Ok");
        };
        let Ok(decoded) = sqrt_price_x96_to_price(encoded) else {
            panic!("expected Ok");
        };
        let relative = ((decoded.get() - price.get()) / price.get()).abs();
        prop_assert!(relative < 1e-9, "relative drift {relative}");
    }

    #[test]
    fn tick_survives_the_x96_round_trip(raw in -400_000i32..400_000) {
        let Ok(tick) = Tick::new(raw) else {
            panic!("stays in range");
        };
        let Ok(encoded) = tick_to_sqrt_price_x96(tick) else {
            panic!("expected Ok");
        };
        let Ok(decoded) = tick_at_sqrt_price(encoded) else {
            panic!("expected Ok");
        };
        prop_assert!((decoded.get() - raw).abs() <= 1);
    }

    // -- mul_div ------------------------------------------------------------

    #[test]
    fn mul_div_by_the_multiplier_is_identity(a in any::<u128>(), b in 1u128..) {
        let Ok(result) = mul_div(U256::from(a), U256::from(b), U256::from(b)) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(result, U256::from(a));
    }

    // -- liquidity round trip -----------------------------------------------

    #[test]
    fn amounts_never_recover_more_liquidity(
        // Kept below ~1e14 so the f64 leg of the inverse mapping cannot
        // drift by a whole unit before the final floor.
        liquidity in 1_000_000u128..100_000_000_000_000,
        low_step in -2_000i32..2_000,
        width in 1i32..2_000,
        current_offset in 0i32..3_000,
    ) {
        let (Ok(tick_low), Ok(tick_high)) =
            (Tick::new(low_step * 60), Tick::new((low_step + width) * 60)) else {
            panic!("stays in range");
        };
        let Ok(current_tick) = Tick::new(tick_low.get() - 1_500 + current_offset) else {
            panic!("stays in range");
        };
        let Ok(current) = tick_to_sqrt_price_x96(current_tick) else {
            panic!("expected Ok");
        };

        let original = Liquidity::new(liquidity);
        let Ok((amount0, amount1)) =
            amounts_for_liquidity(original, current, tick_low, tick_high) else {
            panic!("expected Ok");
        };
        if amount0 == Amount::ZERO && amount1 == Amount::ZERO {
            // Narrow ranges can floor both sides to nothing.
            return Ok(());
        }

        let (Ok(lo), Ok(hi)) = (
            tick_to_sqrt_price_x96(tick_low),
            tick_to_sqrt_price_x96(tick_high),
        ) else {
            panic!("expected Ok");
        };
        let Ok(recovered) = liquidity_for_amounts(current, lo, hi, amount0, amount1) else {
            panic!("expected Ok");
        };
        prop_assert!(
            recovered <= original,
            "recovered {recovered} from liquidity {original}"
        );
    }

    // -- sqrt price encoding monotonicity -----------------------------------

    #[test]
    fn encoding_preserves_price_order(a in arb_price(), b in arb_price()) {
        prop_assume!(a != b);
        let (Ok(ea), Ok(eb)) = (price_to_sqrt_price_x96(a), price_to_sqrt_price_x96(b)) else {
            panic!("expected Ok");
        };
        if a < b {
            prop_assert!(ea <= eb);
        } else {
            prop_assert!(eb <= ea);
        }
    }
}
