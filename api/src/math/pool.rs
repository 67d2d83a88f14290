use crate::consts::*;
use crate::error::*;
use super::U256;

/// Narrow a 256-bit intermediate back into a token amount.
pub fn to_u64(value: U256) -> DexResult<u64> {
    if value > U256::from(u64::MAX) {
        return Err(DexError::MathOverflow);
    }
    Ok(value.low_u64())
}

/// Narrow a 256-bit intermediate into a 128-bit accumulator.
pub fn to_u128(value: U256) -> DexResult<u128> {
    if value > U256::from(u128::MAX) {
        return Err(DexError::MathOverflow);
    }
    Ok(value.as_u128())
}

/// Tokens a depositor must bring to mint `shares`, rounded up so the pool
/// is never diluted: `ceil(shares * pool / total_supply)`.
pub fn required_tokens(shares: u64, pool: u64, total_supply: u64) -> DexResult<u64> {
    if total_supply == 0 {
        return Err(DexError::NoLiquidity);
    }

    let numerator = (shares as u128)
        .checked_mul(pool as u128)
        .ok_or(DexError::MathOverflow)?;
    let supply = total_supply as u128;
    let required = numerator / supply + u128::from(numerator % supply != 0);

    u64::try_from(required).map_err(|_| DexError::MathOverflow)
}

/// Tokens paid out for burning `shares`, rounded down in favour of the
/// pool: `floor(shares * pool / total_supply)`.
pub fn tokens_for_shares(shares: u64, pool: u64, total_supply: u64) -> DexResult<u64> {
    if total_supply == 0 {
        return Err(DexError::NoLiquidity);
    }

    let amount = (shares as u128)
        .checked_mul(pool as u128)
        .ok_or(DexError::MathOverflow)?
        / total_supply as u128;

    u64::try_from(amount).map_err(|_| DexError::MathOverflow)
}

/// Constant-product quote with the fee taken from the input first.
///
/// ```text
/// in_with_fee = amount_in * (FEE_DENOMINATOR - fee_bps)
/// out         = reserve_out * in_with_fee / (reserve_in * FEE_DENOMINATOR + in_with_fee)
/// ```
pub fn swap_output(amount_in: u64, reserve_in: u64, reserve_out: u64, fee_bps: u64) -> DexResult<u64> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(DexError::NoLiquidity);
    }
    if fee_bps >= FEE_DENOMINATOR {
        return Err(DexError::InvalidConfig);
    }

    let in_with_fee = U256::from(amount_in)
        .checked_mul(U256::from(FEE_DENOMINATOR - fee_bps))
        .ok_or(DexError::MathOverflow)?;
    let numerator = in_with_fee
        .checked_mul(U256::from(reserve_out))
        .ok_or(DexError::MathOverflow)?;
    let denominator = U256::from(reserve_in)
        .checked_mul(U256::from(FEE_DENOMINATOR))
        .and_then(|d| d.checked_add(in_with_fee))
        .ok_or(DexError::MathOverflow)?;

    to_u64(numerator / denominator)
}

/// Spot price of one unit of the base pool expressed in the quote pool,
/// scaled by `PRICE_PRECISION`.
pub fn price_ratio(quote_pool: u64, base_pool: u64) -> DexResult<u128> {
    if base_pool == 0 {
        return Err(DexError::NoLiquidity);
    }

    let ratio = U256::from(quote_pool)
        .checked_mul(U256::from(PRICE_PRECISION))
        .ok_or(DexError::MathOverflow)?
        / U256::from(base_pool);

    to_u128(ratio)
}
