//! Deposit quoting: given a desired token0 amount and a price range,
//! compute the token1 amount the position needs alongside it.
//!
//! The solver mixes the two arithmetic regimes on purpose. A cheap
//! closed-form pass in `f64` classifies the request and produces an
//! upper bound for `amount1`; when the range is realistic, the result
//! is then reconciled through the Q64.96 integer path so the quote
//! reflects the same floor-rounding the pool contract applies.

use crate::domain::{Amount, FeeTier, Liquidity, Price, SqrtPriceX96, Q96_F64};
use crate::error::EngineError;
use crate::math::{
    amounts_for_liquidity, liquidity_for_amounts, nearest_usable_tick, price_to_sqrt_price_x96,
    price_to_tick, tick_at_sqrt_price, BASE,
};
use crate::traits::PriceSource;

/// Whole-token amounts are carried through the integer path at this
/// fixed resolution.
const AMOUNT_SCALE: f64 = 1e18;
const AMOUNT_SCALE_INT: u128 = 1_000_000_000_000_000_000;

/// A validated deposit request: how much token0 the caller wants to
/// provide, over which price range, and how much slippage they accept.
///
/// All quantities are continuous whole-token values; decimal scaling
/// into base units happens inside the solver, never at this surface.
///
/// # Examples
///
/// ```
/// use naiad_clmm::solver::DepositRequest;
///
/// let request = DepositRequest::new(1.0, 4545.0, 5500.0, 0.5);
/// assert!(request.is_ok());
/// assert!(DepositRequest::new(1.0, 5500.0, 4545.0, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepositRequest {
    amount0: f64,
    lower_price: Price,
    upper_price: Price,
    slippage_percent: f64,
}

impl DepositRequest {
    /// Validates and builds a deposit request.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] if `amount0` is non-positive or
    ///   non-finite, either bound is not a valid price, or the slippage
    ///   lies outside `[0, 100]`.
    /// - [`EngineError::DegenerateRange`] if the lower bound is not
    ///   strictly below the upper bound.
    pub fn new(
        amount0: f64,
        lower_price: f64,
        upper_price: f64,
        slippage_percent: f64,
    ) -> crate::error::Result<Self> {
        if !amount0.is_finite() || amount0 <= 0.0 {
            return Err(EngineError::InvalidInput(
                "deposit amount must be finite and positive",
            ));
        }
        let lower_price = Price::new(lower_price)
            .map_err(|_| EngineError::InvalidInput("lower bound must be a finite positive price"))?;
        let upper_price = Price::new(upper_price)
            .map_err(|_| EngineError::InvalidInput("upper bound must be a finite positive price"))?;
        if lower_price >= upper_price {
            return Err(EngineError::DegenerateRange(
                "lower bound must be strictly below upper bound",
            ));
        }
        if !slippage_percent.is_finite() || !(0.0..=100.0).contains(&slippage_percent) {
            return Err(EngineError::InvalidInput(
                "slippage must lie within [0, 100] percent",
            ));
        }
        Ok(Self {
            amount0,
            lower_price,
            upper_price,
            slippage_percent,
        })
    }

    /// Desired token0 amount, in whole tokens.
    #[must_use]
    pub const fn amount0(&self) -> f64 {
        self.amount0
    }

    /// Lower bound of the position's price range.
    #[must_use]
    pub const fn lower_price(&self) -> Price {
        self.lower_price
    }

    /// Upper bound of the position's price range.
    #[must_use]
    pub const fn upper_price(&self) -> Price {
        self.upper_price
    }

    /// Accepted slippage, in percent.
    #[must_use]
    pub const fn slippage_percent(&self) -> f64 {
        self.slippage_percent
    }
}

fn scaled_amount(value: f64) -> crate::error::Result<Amount> {
    let scaled = value * AMOUNT_SCALE;
    if !scaled.is_finite() || scaled < 0.0 || scaled >= 2f64.powi(128) {
        return Err(EngineError::Overflow("scaled amount exceeds 128 bits"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let truncated = scaled as u128;
    Ok(Amount::new(truncated))
}

/// Quotes the token1 amount that pairs with the requested token0
/// deposit at the given pool price.
///
/// Two regimes:
///
/// - When the range sits so far below the current price that the unit
///   reference liquidity already prices a single token0 above the upper
///   bound, the quote is the linear fallback
///   `amount0 * adjusted_price + lower * amount0 * slippage`.
/// - Otherwise the range bounds are snapped to the fee tier's usable
///   ticks, the token0 amount is inflated by its slippage margin, and
///   the resulting liquidity is reconciled through the integer path so
///   the final `amount1` carries contract-exact rounding. Requests too
///   small to survive whole-token flooring short-circuit to the
///   closed-form bound.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if the current price does not lie
///   strictly below the range's upper bound.
/// - Propagates conversion failures from the tick and fixed-point
///   helpers.
pub fn quote_deposit(
    request: &DepositRequest,
    current_price: Price,
    fee_tier: FeeTier,
) -> crate::error::Result<f64> {
    if current_price >= request.upper_price() {
        return Err(EngineError::InvalidInput(
            "current price must lie strictly below the upper bound",
        ));
    }
    let spacing = fee_tier.tick_spacing();
    let current_x96 = price_to_sqrt_price_x96(current_price)?;

    let sqrt_current = current_price.sqrt();
    let sqrt_lower = request.lower_price().sqrt();
    let sqrt_upper = request.upper_price().sqrt();

    // Liquidity one token0 would provide from the current price up to
    // the upper bound, and the token1 value it pins at the lower side.
    let base_liquidity = sqrt_current * sqrt_upper / (sqrt_upper - sqrt_current);
    let adjusted_price = base_liquidity * (sqrt_current - sqrt_lower);
    if adjusted_price > request.upper_price().get() {
        return Ok(request.amount0() * adjusted_price
            + request.lower_price().get() * request.amount0() * request.slippage_percent());
    }

    let tick_low = nearest_usable_tick(price_to_tick(request.lower_price())?, spacing)?;
    let tick_high = nearest_usable_tick(price_to_tick(request.upper_price())?, spacing)?;
    let current_tick = tick_at_sqrt_price(current_x96)?;
    let snapped_current = nearest_usable_tick(current_tick, spacing)?;

    // Inflate the deposit by its slippage margin before sizing.
    let amount0_adjusted = request.amount0()
        + (request.amount0() - request.amount0() * (100.0 - request.slippage_percent()) / 100.0);
    let liquidity_unit =
        amount0_adjusted * sqrt_current * sqrt_upper / (sqrt_upper - sqrt_current);

    // Range membership uses the raw tick; the sqrt term uses the snapped
    // one, matching how positions are actually minted on the grid.
    let sqrt_snapped = BASE.powf(f64::from(snapped_current.get()) / 2.0);
    let sqrt_low = BASE.powf(f64::from(tick_low.get()) / 2.0);
    let sqrt_high = BASE.powf(f64::from(tick_high.get()) / 2.0);
    let amount1_bound = if current_tick < tick_low {
        0.0
    } else if current_tick >= tick_high {
        liquidity_unit * (sqrt_high - sqrt_low)
    } else {
        liquidity_unit * (sqrt_snapped - sqrt_low)
    };

    // Below one whole token the integer reconciliation floors everything
    // away; the closed-form bound is the quote.
    if amount0_adjusted < 1.0 {
        return Ok(amount1_bound);
    }

    let low_x96 = SqrtPriceX96::from_f64(sqrt_low * Q96_F64)?;
    let high_x96 = SqrtPriceX96::from_f64(sqrt_high * Q96_F64)?;
    let consensus = liquidity_for_amounts(
        current_x96,
        low_x96,
        high_x96,
        scaled_amount(amount0_adjusted)?,
        scaled_amount(amount1_bound)?,
    )?;
    // Back to whole-token liquidity scale, flooring like the contract.
    let whole = Liquidity::new(consensus.get() / AMOUNT_SCALE_INT);
    let (_, amount1) = amounts_for_liquidity(whole, current_x96, tick_low, tick_high)?;
    #[allow(clippy::cast_precision_loss)]
    let quoted = amount1.get() as f64;
    Ok(quoted)
}

/// Like [`quote_deposit`], but pulls the current price through a
/// [`PriceSource`].
///
/// # Errors
///
/// Returns [`EngineError::PriceUnavailable`] if the source fails;
/// otherwise the same failure modes as [`quote_deposit`].
pub fn quote_deposit_with_source<S: PriceSource>(
    request: &DepositRequest,
    source: &S,
    fee_tier: FeeTier,
) -> crate::error::Result<f64> {
    let current_price = source
        .current_price()
        .map_err(|_| EngineError::PriceUnavailable("pool price reading failed"))?;
    quote_deposit(request, current_price, fee_tier)
}
