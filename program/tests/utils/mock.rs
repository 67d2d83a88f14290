#![cfg(test)]
use std::cell::{Cell, RefCell};
use solana_program::clock::Clock;
use steel::*;
use dexcore::*;
use dexcore_api::prelude::*;

pub type TestExchange = Exchange<MockTransfers, MockCustodian, MockAdmin>;

#[derive(Default)]
pub struct MockTransfers {
    pub log: RefCell<Vec<Effect>>,
    pub failing_token: Cell<Option<Pubkey>>,
}

impl AssetTransfer for MockTransfers {
    fn transfer(&self, from: &Pubkey, to: &Pubkey, token: &Pubkey, amount: u64) -> ProgramResult {
        if self.failing_token.get() == Some(*token) {
            return Err(ProgramError::InsufficientFunds);
        }
        self.log.borrow_mut().push(Effect::Transfer { from: *from, to: *to, token: *token, amount });
        Ok(())
    }
}

pub type Hook = Box<dyn Fn() -> ProgramResult>;

#[derive(Default)]
pub struct MockCustodian {
    pub log: RefCell<Vec<Effect>>,
    /// Runs inside every deposit, used to call back into the exchange.
    pub on_deposit: RefCell<Option<Hook>>,
}

impl Custodian for MockCustodian {
    fn set_delegate(&self, bucket: &Pubkey, delegate: &Pubkey) -> ProgramResult {
        self.log.borrow_mut().push(Effect::SetDelegate { bucket: *bucket, delegate: *delegate });
        Ok(())
    }

    fn deposit(&self, bucket: &Pubkey, amount: u64) -> ProgramResult {
        if let Some(hook) = self.on_deposit.borrow().as_ref() {
            hook()?;
        }
        self.log.borrow_mut().push(Effect::Deposit { bucket: *bucket, amount });
        Ok(())
    }

    fn withdraw(&self, bucket: &Pubkey, receiver: &Pubkey, amount: u64) -> ProgramResult {
        self.log.borrow_mut().push(Effect::Withdraw { bucket: *bucket, receiver: *receiver, amount });
        Ok(())
    }

    fn apply_ban(&self, bucket: &Pubkey, subject: &Pubkey, period: u64) -> ProgramResult {
        self.log.borrow_mut().push(Effect::ApplyBan { bucket: *bucket, subject: *subject, period });
        Ok(())
    }
}

pub struct MockAdmin {
    pub admin: Pubkey,
    pub managers: Vec<Pubkey>,
}

impl AdminGate for MockAdmin {
    fn is_admin(&self, who: &Pubkey) -> bool {
        self.admin == *who
    }

    fn is_manager(&self, who: &Pubkey) -> bool {
        self.managers.contains(who)
    }
}

pub fn setup_exchange(config: DexConfig) -> TestExchange {
    let admin = MockAdmin {
        admin: Pubkey::new_unique(),
        managers: vec![Pubkey::new_unique()],
    };
    Exchange::new(MockTransfers::default(), MockCustodian::default(), admin, config).unwrap()
}

pub fn no_fee_config() -> DexConfig {
    DexConfig {
        swap_fee_bps: 0,
        collecting_period: 10,
        ..Default::default()
    }
}

pub fn clock(slot: u64, unix_timestamp: i64) -> Clock {
    Clock {
        slot,
        unix_timestamp,
        ..Clock::default()
    }
}

pub fn launch(
    dex: &TestExchange,
    caller: &Pubkey,
    token_a: Pubkey,
    token_b: Pubkey,
    amount_a: u64,
    amount_b: u64,
    candidate: Pubkey,
    clock: &Clock,
) -> Result<(Pubkey, u64), ProgramError> {
    dex.launch_exchange(
        caller,
        clock,
        ParsedLaunchExchangeIx {
            token_a,
            token_b,
            amount_a,
            amount_b,
            candidate,
            deadline: None,
        },
    )
}

pub fn invest(
    dex: &TestExchange,
    caller: &Pubkey,
    pair_id: Pubkey,
    shares: u64,
    candidate: Pubkey,
    clock: &Clock,
) -> Result<(u64, u64), ProgramError> {
    dex.invest_liquidity(
        caller,
        clock,
        ParsedInvestLiquidityIx {
            pair_id,
            shares,
            max_a_in: u64::MAX,
            max_b_in: u64::MAX,
            candidate,
            deadline: None,
        },
    )
}

pub fn divest(
    dex: &TestExchange,
    caller: &Pubkey,
    pair_id: Pubkey,
    shares: u64,
    clock: &Clock,
) -> Result<(u64, u64), ProgramError> {
    dex.divest_liquidity(
        caller,
        clock,
        ParsedDivestLiquidityIx {
            pair_id,
            shares,
            min_a_out: 1,
            min_b_out: 1,
            candidate: NO_DELEGATE,
            deadline: None,
        },
    )
}

pub fn vote(
    dex: &TestExchange,
    caller: &Pubkey,
    pair_id: Pubkey,
    candidate: Pubkey,
    clock: &Clock,
) -> Result<Pubkey, ProgramError> {
    dex.vote(caller, clock, ParsedVoteIx { pair_id, candidate })
}

/// Holder balances must always add up to the pair's supply.
pub fn assert_supply_matches(dex: &TestExchange, pair_id: &Pubkey) {
    let supply = dex.total_supply(pair_id).unwrap();
    assert_eq!(dex.shares_outstanding(pair_id), supply as u128);
}

pub fn route(hops: &[(Pubkey, SwapDirection)]) -> Vec<SwapHop> {
    hops.iter()
        .map(|&(pair_id, direction)| SwapHop { pair_id, direction })
        .collect()
}

pub fn swap_route(
    dex: &TestExchange,
    caller: &Pubkey,
    hops: Vec<SwapHop>,
    amount_in: u64,
    min_amount_out: u64,
    receiver: Pubkey,
    clock: &Clock,
) -> Result<u64, ProgramError> {
    dex.swap_route(
        caller,
        clock,
        ParsedSwapRouteIx {
            hops,
            amount_in,
            min_amount_out,
            receiver,
            deadline: None,
        },
    )
}

pub fn err(error: DexError) -> ProgramError {
    error.into()
}
