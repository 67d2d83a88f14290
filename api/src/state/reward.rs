use crate::consts::*;
use crate::error::*;
use crate::math::*;

/// Per-pair reward accumulator. Income is queued in `next_reward` and paid
/// out linearly over the following collecting period.
///
/// `reward_per_share` and `reward_per_block` are scaled by `PRECISION`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardState {
    pub reward_per_share: U256,
    pub reward_per_block: U256,
    pub next_reward: u64,
    pub total_reward: u64,   // All income ever received
    pub reward_paid: u64,
    pub last_update_level: u64,
    pub period_end: u64,
}

/// Per-owner settlement record, both fields scaled by `PRECISION`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserReward {
    pub reward_f: U256,
    pub reward_paid_f: U256,
}

impl RewardState {
    pub fn new(level: u64, period: u64) -> DexResult<Self> {
        Ok(Self {
            last_update_level: level,
            period_end: level.checked_add(period).ok_or(DexError::MathOverflow)?,
            ..Default::default()
        })
    }

    /// Queues freshly received income for the next period.
    pub fn accrue(&mut self, amount: u64) -> DexResult<()> {
        self.next_reward = self.next_reward.checked_add(amount).ok_or(DexError::MathOverflow)?;
        self.total_reward = self.total_reward.checked_add(amount).ok_or(DexError::MathOverflow)?;
        Ok(())
    }

    /// Brings `reward_per_share` up to `level`. With nothing staked the
    /// state is left as is and queued income keeps waiting.
    pub fn update(&mut self, total_supply: u64, level: u64, period: u64) -> DexResult<()> {
        if total_supply == 0 {
            return Ok(());
        }
        if period == 0 {
            return Err(DexError::InvalidConfig);
        }

        let supply = U256::from(total_supply);

        let rewards_level = level.min(self.period_end);
        if rewards_level > self.last_update_level {
            let blocks = U256::from(rewards_level - self.last_update_level);
            self.add_per_share(blocks, supply)?;
        }

        if level > self.period_end {
            let periods = (level - self.period_end) / period + 1;
            let duration = periods.checked_mul(period).ok_or(DexError::MathOverflow)?;

            self.reward_per_block = U256::from(self.next_reward)
                .checked_mul(U256::from(PRECISION))
                .ok_or(DexError::MathOverflow)?
                / U256::from(duration);
            self.next_reward = 0;

            let blocks = U256::from(level - self.period_end);
            self.add_per_share(blocks, supply)?;

            self.period_end = self.period_end.checked_add(duration).ok_or(DexError::MathOverflow)?;
        }

        self.last_update_level = self.last_update_level.max(level);
        Ok(())
    }

    /// Settles an owner whose balance moves from `balance_before` to
    /// `balance_after`. `update` must have run first.
    pub fn update_user(&self, user: &mut UserReward, balance_before: u64, balance_after: u64) -> DexResult<()> {
        let earned = U256::from(balance_before)
            .checked_mul(self.reward_per_share)
            .ok_or(DexError::MathOverflow)?;

        user.reward_f = user.reward_f
            .checked_add(earned)
            .and_then(|r| r.checked_sub(user.reward_paid_f))
            .ok_or(DexError::MathOverflow)?;
        user.reward_paid_f = U256::from(balance_after)
            .checked_mul(self.reward_per_share)
            .ok_or(DexError::MathOverflow)?;

        Ok(())
    }

    /// Pays out the whole units of a settled record. The fixed-point
    /// remainder stays with the owner.
    pub fn claim(&mut self, user: &mut UserReward) -> DexResult<u64> {
        let precision = U256::from(PRECISION);
        let amount = to_u64(user.reward_f / precision)?;

        let paid = self.reward_paid.checked_add(amount).ok_or(DexError::MathOverflow)?;
        if paid > self.total_reward {
            return Err(DexError::InsufficientReserves);
        }

        user.reward_f = user.reward_f % precision;
        self.reward_paid = paid;

        Ok(amount)
    }

    fn add_per_share(&mut self, blocks: U256, supply: U256) -> DexResult<()> {
        let reward = blocks
            .checked_mul(self.reward_per_block)
            .ok_or(DexError::MathOverflow)?;
        self.reward_per_share = self.reward_per_share
            .checked_add(reward / supply)
            .ok_or(DexError::MathOverflow)?;
        Ok(())
    }
}
