use std::collections::BTreeMap;
use steel::*;
use crate::consts::*;
use crate::error::*;
use crate::math::*;
use super::*;

/// Collateral-side state of a pair holding the native asset: who its
/// holders vote for, who is banned, and the staking income they share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub address: Pubkey,
    pub delegation: DelegationEngine,
    pub bans: BanRegistry,
    pub rewards: RewardState,
    users: BTreeMap<Pubkey, UserReward>,
}

impl Bucket {
    pub fn new(address: Pubkey, level: u64, period: u64) -> DexResult<Self> {
        Ok(Self {
            address,
            delegation: DelegationEngine::default(),
            bans: BanRegistry::default(),
            rewards: RewardState::new(level, period)?,
            users: BTreeMap::new(),
        })
    }

    pub fn current_delegate(&self) -> Pubkey {
        self.delegation.current_delegate()
    }

    pub fn user_reward(&self, owner: &Pubkey) -> UserReward {
        self.users.get(owner).copied().unwrap_or_default()
    }

    pub fn is_banned(&self, subject: &Pubkey, now: i64) -> bool {
        self.bans.is_banned(subject, now)
    }

    pub fn ban(&mut self, subject: Pubkey, period: u64, now: i64) {
        self.bans.ban(subject, period, now);
    }

    /// Refreshes the pair-wide accumulator. Must run before any share
    /// balance of the pair changes.
    pub fn settle(&mut self, total_supply: u64, level: u64, period: u64) -> DexResult<()> {
        self.rewards.update(total_supply, level, period)
    }

    pub fn settle_user(&mut self, owner: &Pubkey, balance_before: u64, balance_after: u64) -> DexResult<()> {
        let mut user = self.user_reward(owner);
        self.rewards.update_user(&mut user, balance_before, balance_after)?;
        self.users.insert(*owner, user);
        Ok(())
    }

    pub fn accrue(&mut self, amount: u64) -> DexResult<()> {
        self.rewards.accrue(amount)
    }

    /// Casts `owner`'s full balance for `candidate`.
    pub fn vote(&mut self, owner: Pubkey, candidate: Pubkey, weight: u64, now: i64) -> DexResult<Option<Pubkey>> {
        self.delegation.vote(owner, candidate, weight, &self.bans, now)
    }

    /// Re-casts `owner`'s vote after a balance change. `NO_DELEGATE` keeps
    /// whatever the owner voted for before.
    pub fn revote(&mut self, owner: Pubkey, candidate: Pubkey, weight: u64, now: i64) -> DexResult<Option<Pubkey>> {
        let candidate = if candidate == NO_DELEGATE {
            self.delegation.voter(&owner).candidate
        } else {
            candidate
        };
        self.vote(owner, candidate, weight, now)
    }

    /// Claims the settled reward of `owner`.
    pub fn withdraw_reward(&mut self, owner: &Pubkey) -> DexResult<u64> {
        let mut user = self.user_reward(owner);
        let amount = self.rewards.claim(&mut user)?;
        self.users.insert(*owner, user);
        Ok(amount)
    }

    /// What `withdraw_reward` would pay at `level`, without touching state.
    pub fn pending_reward(
        &self,
        owner: &Pubkey,
        balance: u64,
        total_supply: u64,
        level: u64,
        period: u64,
    ) -> DexResult<u64> {
        let mut rewards = self.rewards;
        let mut user = self.user_reward(owner);

        rewards.update(total_supply, level, period)?;
        rewards.update_user(&mut user, balance, balance)?;

        let precision = U256::from(PRECISION);
        to_u64(user.reward_f / precision)
    }
}
