use steel::*;
use crate::consts::*;
use crate::error::*;
use crate::math::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum SwapDirection {
    AToB = 0,
    BToA,
}

/// One leg of a swap route.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapHop {
    pub pair_id: Pubkey,
    pub direction: SwapDirection,
}

/// Pool ledger entry for one listed token pair. Pairs are keyed by
/// `find_pair_pda`, which is independent of token order; `token_a` and
/// `token_b` keep the order they had when the pair was first launched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pair {
    pub token_a: Pubkey,
    pub token_b: Pubkey,

    pub token_a_pool: u64,
    pub token_b_pool: u64,
    pub total_supply: u64,

    // Time-weighted price accumulators, scaled by PRICE_PRECISION
    pub token_a_price_cum: u128,
    pub token_b_price_cum: u128,
    pub last_timestamp: i64,

    pub bucket: Option<Pubkey>,   // Collateral custodian, set iff one side is NATIVE_ASSET
}

impl Pair {
    pub fn new(token_a: Pubkey, token_b: Pubkey, bucket: Option<Pubkey>) -> Self {
        Self {
            token_a,
            token_b,
            bucket,
            ..Default::default()
        }
    }

    pub fn has_collateral(&self) -> bool {
        self.token_a == NATIVE_ASSET || self.token_b == NATIVE_ASSET
    }

    pub fn is_drained(&self) -> bool {
        self.total_supply == 0
    }

    /// Returns `(token_in, token_out)` for a swap direction.
    pub fn tokens(&self, direction: SwapDirection) -> (Pubkey, Pubkey) {
        match direction {
            SwapDirection::AToB => (self.token_a, self.token_b),
            SwapDirection::BToA => (self.token_b, self.token_a),
        }
    }

    /// Returns `(reserve_in, reserve_out)` for a swap direction.
    pub fn reserves(&self, direction: SwapDirection) -> (u64, u64) {
        match direction {
            SwapDirection::AToB => (self.token_a_pool, self.token_b_pool),
            SwapDirection::BToA => (self.token_b_pool, self.token_a_pool),
        }
    }

    /// Accumulates `ratio * elapsed` for both sides using the reserves as
    /// they were before the current operation. Only the first call at a
    /// given timestamp moves the accumulators; later calls at the same
    /// timestamp are no-ops.
    pub fn update_price_cumulative(&mut self, now: i64) -> DexResult<()> {
        if now <= self.last_timestamp {
            return Ok(());
        }

        if self.token_a_pool > 0 && self.token_b_pool > 0 {
            let elapsed = (now - self.last_timestamp) as u128;
            let a_price = price_ratio(self.token_b_pool, self.token_a_pool)?;
            let b_price = price_ratio(self.token_a_pool, self.token_b_pool)?;

            // Accumulators wrap, consumers only look at differences
            self.token_a_price_cum = self.token_a_price_cum.wrapping_add(a_price.wrapping_mul(elapsed));
            self.token_b_price_cum = self.token_b_price_cum.wrapping_add(b_price.wrapping_mul(elapsed));
        }

        self.last_timestamp = now;
        Ok(())
    }

    /// Seeds an empty pair. The launcher sets the price, so shares are
    /// `min(amount_a, amount_b)`.
    pub fn launch(&mut self, amount_a: u64, amount_b: u64, now: i64) -> DexResult<u64> {
        if amount_a == 0 || amount_b == 0 {
            return Err(DexError::ZeroAmount);
        }
        if !self.is_drained() {
            return Err(DexError::PairAlreadyListed);
        }

        self.update_price_cumulative(now)?;

        let shares = amount_a.min(amount_b);
        self.token_a_pool = amount_a;
        self.token_b_pool = amount_b;
        self.total_supply = shares;

        Ok(shares)
    }

    /// Tokens needed to mint `shares` at the current reserves.
    pub fn invest_quote(&self, shares: u64) -> DexResult<(u64, u64)> {
        if self.is_drained() {
            return Err(DexError::NoLiquidity);
        }
        if shares == 0 {
            return Err(DexError::ZeroAmount);
        }

        let a = required_tokens(shares, self.token_a_pool, self.total_supply)?;
        let b = required_tokens(shares, self.token_b_pool, self.total_supply)?;
        Ok((a, b))
    }

    pub fn invest(&mut self, shares: u64, max_a_in: u64, max_b_in: u64, now: i64) -> DexResult<(u64, u64)> {
        let (a, b) = self.invest_quote(shares)?;
        if a > max_a_in || b > max_b_in {
            return Err(DexError::SlippageExceeded);
        }

        self.update_price_cumulative(now)?;

        self.token_a_pool = self.token_a_pool.checked_add(a).ok_or(DexError::MathOverflow)?;
        self.token_b_pool = self.token_b_pool.checked_add(b).ok_or(DexError::MathOverflow)?;
        self.total_supply = self.total_supply.checked_add(shares).ok_or(DexError::MathOverflow)?;

        Ok((a, b))
    }

    /// Tokens paid out for burning `shares` at the current reserves.
    pub fn divest_quote(&self, shares: u64) -> DexResult<(u64, u64)> {
        if self.is_drained() {
            return Err(DexError::NoLiquidity);
        }
        if shares == 0 {
            return Err(DexError::ZeroAmount);
        }
        if shares > self.total_supply {
            return Err(DexError::InsufficientShares);
        }

        let a = tokens_for_shares(shares, self.token_a_pool, self.total_supply)?;
        let b = tokens_for_shares(shares, self.token_b_pool, self.total_supply)?;
        Ok((a, b))
    }

    pub fn divest(&mut self, shares: u64, min_a_out: u64, min_b_out: u64, now: i64) -> DexResult<(u64, u64)> {
        if min_a_out == 0 || min_b_out == 0 {
            return Err(DexError::ZeroAmount);
        }

        let (a, b) = self.divest_quote(shares)?;
        if a < min_a_out || b < min_b_out {
            return Err(DexError::SlippageExceeded);
        }

        self.update_price_cumulative(now)?;

        self.token_a_pool = self.token_a_pool.checked_sub(a).ok_or(DexError::InsufficientReserves)?;
        self.token_b_pool = self.token_b_pool.checked_sub(b).ok_or(DexError::InsufficientReserves)?;
        self.total_supply -= shares;

        if self.total_supply == 0 && (self.token_a_pool != 0 || self.token_b_pool != 0) {
            // Same ratio on both sides, so the last shares always take everything
            return Err(DexError::InsufficientReserves);
        }

        Ok((a, b))
    }

    pub fn swap_quote(&self, direction: SwapDirection, amount_in: u64, fee_bps: u64) -> DexResult<u64> {
        if self.is_drained() {
            return Err(DexError::NoLiquidity);
        }
        if amount_in == 0 {
            return Err(DexError::ZeroAmount);
        }

        let (reserve_in, reserve_out) = self.reserves(direction);
        let out = swap_output(amount_in, reserve_in, reserve_out, fee_bps)?;
        if out == 0 {
            return Err(DexError::ZeroOutput);
        }

        Ok(out)
    }

    pub fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: u64,
        min_amount_out: u64,
        fee_bps: u64,
        now: i64,
    ) -> DexResult<u64> {
        let out = self.swap_quote(direction, amount_in, fee_bps)?;
        if out < min_amount_out {
            return Err(DexError::SlippageExceeded);
        }

        self.update_price_cumulative(now)?;

        let (pool_in, pool_out) = match direction {
            SwapDirection::AToB => (&mut self.token_a_pool, &mut self.token_b_pool),
            SwapDirection::BToA => (&mut self.token_b_pool, &mut self.token_a_pool),
        };

        // The fee part of amount_in stays in the pool
        *pool_in = pool_in.checked_add(amount_in).ok_or(DexError::MathOverflow)?;
        *pool_out = pool_out.checked_sub(out).ok_or(DexError::InsufficientReserves)?;

        Ok(out)
    }
}
