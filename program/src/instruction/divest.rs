use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Burns `shares` of the caller and pays out the proportional reserves.
    pub fn divest_liquidity(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedDivestLiquidityIx,
    ) -> Result<(u64, u64), ProgramError> {
        check_deadline(args.deadline, clock.unix_timestamp)?;

        let period = self.config.collecting_period;

        self.transact(|storage, effects| {
            let pair = storage.pairs
                .get_mut(&args.pair_id)
                .ok_or(DexError::PairNotFound)?;

            let before = storage.shares.balance_of(&args.pair_id, caller);
            check_condition(before >= args.shares, "Not enough shares", DexError::InsufficientShares)?;

            let supply = pair.total_supply;
            let (amount_a, amount_b) = pair.divest(args.shares, args.min_a_out, args.min_b_out, clock.unix_timestamp)?;

            solana_program::msg!("shares: {}", args.shares);
            solana_program::msg!("paid: {} / {}", amount_a, amount_b);

            let (token_a, token_b) = (pair.token_a, pair.token_b);
            self.pay_out(effects, pair, caller, &token_a, amount_a);
            self.pay_out(effects, pair, caller, &token_b, amount_b);

            if let Some(bucket) = storage.buckets.get_mut(&args.pair_id) {
                let after = before - args.shares;
                update_holder(bucket, effects, caller, &args.candidate, before, after, supply, clock, period)?;
            }

            storage.shares.burn(&args.pair_id, caller, args.shares)?;

            Ok((amount_a, amount_b))
        })
    }
}

pub fn process_divest_liquidity<T, C, G>(
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
    let raw_args = DivestLiquidityIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.divest_liquidity(signer, clock, args)?;

    Ok(())
}
