use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::guard::ReentrancyGuard;

/// Everything an exchange owns. Operations work on a staged clone and the
/// clone replaces this only once every effect went through.
#[derive(Clone, Debug, Default)]
pub struct Storage {
    pub pairs: BTreeMap<Pubkey, Pair>,
    pub buckets: BTreeMap<Pubkey, Bucket>,   // Keyed by pair id
    pub shares: ShareRegistry,
}

impl Storage {
    pub fn bucket_mut(&mut self, pair_id: &Pubkey) -> DexResult<&mut Bucket> {
        if !self.pairs.contains_key(pair_id) {
            return Err(DexError::PairNotFound);
        }
        self.buckets.get_mut(pair_id).ok_or(DexError::CustodianMissing)
    }
}

pub struct Exchange<T: AssetTransfer, C: Custodian, G: AdminGate> {
    storage: RefCell<Storage>,
    entered: Cell<bool>,
    transfers: T,
    custodian: C,
    admin: G,
    pub config: DexConfig,
}

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    pub fn new(transfers: T, custodian: C, admin: G, config: DexConfig) -> DexResult<Self> {
        config.validate()?;
        Ok(Self {
            storage: RefCell::new(Storage::default()),
            entered: Cell::new(false),
            transfers,
            custodian,
            admin,
            config,
        })
    }

    pub fn transfers(&self) -> &T {
        &self.transfers
    }

    pub fn custodian(&self) -> &C {
        &self.custodian
    }

    pub fn admin(&self) -> &G {
        &self.admin
    }

    /// Runs `op` as one atomic, non-reentrant step.
    pub(crate) fn transact<R>(
        &self,
        op: impl FnOnce(&mut Storage, &mut Vec<Effect>) -> Result<R, ProgramError>,
    ) -> Result<R, ProgramError> {
        let _guard = ReentrancyGuard::enter(&self.entered)?;

        let mut staged = self.storage.borrow().clone();
        let mut effects = Vec::new();

        let result = op(&mut staged, &mut effects)?;

        for effect in &effects {
            apply_effect(&self.transfers, &self.custodian, effect)?;
        }

        *self.storage.borrow_mut() = staged;
        Ok(result)
    }

    fn read<R>(&self, view: impl FnOnce(&Storage) -> DexResult<R>) -> DexResult<R> {
        view(&self.storage.borrow())
    }

    /// Tokens pulled from `owner` into custody.
    pub(crate) fn pay_in(&self, effects: &mut Vec<Effect>, pair: &Pair, owner: &Pubkey, token: &Pubkey, amount: u64) {
        match native_bucket(pair, token) {
            Some(bucket) => {
                effects.push(Effect::Transfer { from: *owner, to: bucket, token: *token, amount });
                effects.push(Effect::Deposit { bucket, amount });
            }
            None => effects.push(Effect::Transfer { from: *owner, to: self.config.vault, token: *token, amount }),
        }
    }

    /// Tokens released from custody to `receiver`.
    pub(crate) fn pay_out(&self, effects: &mut Vec<Effect>, pair: &Pair, receiver: &Pubkey, token: &Pubkey, amount: u64) {
        if amount == 0 {
            return;
        }
        match native_bucket(pair, token) {
            Some(bucket) => effects.push(Effect::Withdraw { bucket, receiver: *receiver, amount }),
            None => effects.push(Effect::Transfer { from: self.config.vault, to: *receiver, token: *token, amount }),
        }
    }

    /// Tokens handed from one pair's custody to the next in a route. `source`
    /// and `target` are the buckets holding the token, `None` for the vault.
    pub(crate) fn pay_across(
        &self,
        effects: &mut Vec<Effect>,
        source: Option<Pubkey>,
        target: Option<Pubkey>,
        token: &Pubkey,
        amount: u64,
    ) {
        if source == target {
            return;
        }

        let vault = self.config.vault;
        match source {
            Some(bucket) => effects.push(Effect::Withdraw { bucket, receiver: target.unwrap_or(vault), amount }),
            None => {
                if let Some(bucket) = target {
                    effects.push(Effect::Transfer { from: vault, to: bucket, token: *token, amount });
                }
            }
        }
        if let Some(bucket) = target {
            effects.push(Effect::Deposit { bucket, amount });
        }
    }

    pub fn pair(&self, pair_id: &Pubkey) -> Option<Pair> {
        self.storage.borrow().pairs.get(pair_id).cloned()
    }

    pub fn pair_id_of(&self, token_a: &Pubkey, token_b: &Pubkey) -> Pubkey {
        find_pair_pda(token_a, token_b).0
    }

    pub fn share_balance(&self, pair_id: &Pubkey, owner: &Pubkey) -> u64 {
        self.storage.borrow().shares.balance_of(pair_id, owner)
    }

    pub fn total_supply(&self, pair_id: &Pubkey) -> DexResult<u64> {
        self.read(|s| Ok(pair_of(s, pair_id)?.total_supply))
    }

    /// Sum of every holder's balance, which always equals the pair's supply.
    pub fn shares_outstanding(&self, pair_id: &Pubkey) -> u128 {
        self.storage.borrow().shares.total_of(pair_id)
    }

    pub fn reserves(&self, pair_id: &Pubkey) -> DexResult<(u64, u64)> {
        self.read(|s| {
            let pair = pair_of(s, pair_id)?;
            Ok((pair.token_a_pool, pair.token_b_pool))
        })
    }

    /// Price accumulators as they would read at `now`.
    pub fn cumulative_prices(&self, pair_id: &Pubkey, now: i64) -> DexResult<(u128, u128)> {
        self.read(|s| {
            let mut pair = pair_of(s, pair_id)?.clone();
            pair.update_price_cumulative(now)?;
            Ok((pair.token_a_price_cum, pair.token_b_price_cum))
        })
    }

    pub fn swap_quote(&self, pair_id: &Pubkey, direction: SwapDirection, amount_in: u64) -> DexResult<u64> {
        self.read(|s| pair_of(s, pair_id)?.swap_quote(direction, amount_in, self.config.swap_fee_bps))
    }

    /// Output of a whole route at the current reserves.
    pub fn route_quote(&self, hops: &[SwapHop], amount_in: u64) -> DexResult<u64> {
        check_route(hops)?;
        self.read(|s| {
            let mut amount = amount_in;
            let mut held: Option<Pubkey> = None;

            for hop in hops {
                let pair = pair_of(s, &hop.pair_id)?;
                let (token_in, token_out) = pair.tokens(hop.direction);
                if let Some(token) = held {
                    check_condition(token == token_in, "Route is broken", DexError::InvalidPair)?;
                }

                amount = pair.swap_quote(hop.direction, amount, self.config.swap_fee_bps)?;
                held = Some(token_out);
            }

            Ok(amount)
        })
    }

    /// Tokens of each side needed to mint `shares`.
    pub fn invest_quote(&self, pair_id: &Pubkey, shares: u64) -> DexResult<(u64, u64)> {
        self.read(|s| pair_of(s, pair_id)?.invest_quote(shares))
    }

    /// Tokens of each side paid out for burning `shares`.
    pub fn divest_quote(&self, pair_id: &Pubkey, shares: u64) -> DexResult<(u64, u64)> {
        self.read(|s| pair_of(s, pair_id)?.divest_quote(shares))
    }

    pub fn current_delegate(&self, pair_id: &Pubkey) -> DexResult<Pubkey> {
        self.read(|s| Ok(bucket_of(s, pair_id)?.current_delegate()))
    }

    pub fn delegation(&self, pair_id: &Pubkey) -> DexResult<Delegation> {
        self.read(|s| Ok(bucket_of(s, pair_id)?.delegation.delegation()))
    }

    pub fn voter(&self, pair_id: &Pubkey, owner: &Pubkey) -> DexResult<Voter> {
        self.read(|s| Ok(bucket_of(s, pair_id)?.delegation.voter(owner)))
    }

    /// The owner's candidate, or the active delegate when the owner has none.
    pub fn voter_candidate(&self, pair_id: &Pubkey, owner: &Pubkey) -> DexResult<Pubkey> {
        self.read(|s| {
            let bucket = bucket_of(s, pair_id)?;
            let candidate = bucket.delegation.voter(owner).candidate;
            if candidate == NO_DELEGATE {
                return Ok(bucket.current_delegate());
            }
            Ok(candidate)
        })
    }

    pub fn candidate_votes(&self, pair_id: &Pubkey, candidate: &Pubkey) -> DexResult<u128> {
        self.read(|s| Ok(bucket_of(s, pair_id)?.delegation.votes_of(candidate)))
    }

    pub fn is_banned(&self, pair_id: &Pubkey, subject: &Pubkey, now: i64) -> DexResult<bool> {
        self.read(|s| Ok(bucket_of(s, pair_id)?.is_banned(subject, now)))
    }

    /// The last ban recorded for `subject`, expired or not.
    pub fn ban_of(&self, pair_id: &Pubkey, subject: &Pubkey) -> DexResult<Ban> {
        self.read(|s| Ok(bucket_of(s, pair_id)?.bans.get(subject)))
    }

    pub fn pending_reward(&self, pair_id: &Pubkey, owner: &Pubkey, clock: &Clock) -> DexResult<u64> {
        self.read(|s| {
            let pair = pair_of(s, pair_id)?;
            let bucket = bucket_of(s, pair_id)?;
            bucket.pending_reward(
                owner,
                s.shares.balance_of(pair_id, owner),
                pair.total_supply,
                clock.slot,
                self.config.collecting_period,
            )
        })
    }
}

/// The bucket holding `token` for `pair`, if it is the pair's collateral.
pub(crate) fn native_bucket(pair: &Pair, token: &Pubkey) -> Option<Pubkey> {
    pair.bucket.filter(|_| *token == NATIVE_ASSET)
}

fn pair_of<'a>(storage: &'a Storage, pair_id: &Pubkey) -> DexResult<&'a Pair> {
    storage.pairs.get(pair_id).ok_or(DexError::PairNotFound)
}

fn bucket_of<'a>(storage: &'a Storage, pair_id: &Pubkey) -> DexResult<&'a Bucket> {
    pair_of(storage, pair_id)?;
    storage.buckets.get(pair_id).ok_or(DexError::CustodianMissing)
}

pub(crate) fn check_route(hops: &[SwapHop]) -> DexResult<()> {
    check_condition(!hops.is_empty(), "Route is empty", DexError::ZeroAmount)?;
    check_condition(hops.len() <= MAX_ROUTE_HOPS, "Route is too long", DexError::InvalidInstruction)
}

/// Settles rewards and re-casts the vote of a holder whose balance moves
/// from `before` to `after`. `total_supply` is the supply before the move.
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_holder(
    bucket: &mut Bucket,
    effects: &mut Vec<Effect>,
    owner: &Pubkey,
    candidate: &Pubkey,
    before: u64,
    after: u64,
    total_supply: u64,
    clock: &Clock,
    period: u64,
) -> DexResult<()> {
    bucket.settle(total_supply, clock.slot, period)?;
    bucket.settle_user(owner, before, after)?;

    if let Some(delegate) = bucket.revote(*owner, *candidate, after, clock.unix_timestamp)? {
        solana_program::msg!("delegate: {}", delegate);
        effects.push(Effect::SetDelegate { bucket: bucket.address, delegate });
    }

    Ok(())
}
