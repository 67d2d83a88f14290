use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Mints `shares` against proportional deposits of both tokens.
    /// Returns the amounts taken.
    pub fn invest_liquidity(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedInvestLiquidityIx,
    ) -> Result<(u64, u64), ProgramError> {
        check_deadline(args.deadline, clock.unix_timestamp)?;

        let period = self.config.collecting_period;

        self.transact(|storage, effects| {
            let pair = storage.pairs
                .get_mut(&args.pair_id)
                .ok_or(DexError::PairNotFound)?;

            let supply = pair.total_supply;
            let (amount_a, amount_b) = pair.invest(args.shares, args.max_a_in, args.max_b_in, clock.unix_timestamp)?;

            solana_program::msg!("shares: {}", args.shares);
            solana_program::msg!("taken: {} / {}", amount_a, amount_b);

            let (token_a, token_b) = (pair.token_a, pair.token_b);
            self.pay_in(effects, pair, caller, &token_a, amount_a);
            self.pay_in(effects, pair, caller, &token_b, amount_b);

            if let Some(bucket) = storage.buckets.get_mut(&args.pair_id) {
                let before = storage.shares.balance_of(&args.pair_id, caller);
                let after = before.checked_add(args.shares).ok_or(DexError::MathOverflow)?;
                update_holder(bucket, effects, caller, &args.candidate, before, after, supply, clock, period)?;
            }

            storage.shares.mint(&args.pair_id, caller, args.shares)?;

            Ok((amount_a, amount_b))
        })
    }
}

pub fn process_invest_liquidity<T, C, G>(
    dex: &Exchange<T, C, G>,
    signer: &Pubkey,
    clock: &Clock,
    data: &[u8],
) -> ProgramResult
where
    T: AssetTransfer,
    C: Custodian,
    G: AdminGate,
{
    let raw_args = InvestLiquidityIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.invest_liquidity(signer, clock, args)?;

    Ok(())
}
