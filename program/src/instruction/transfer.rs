use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Moves shares between holders. On collateral pairs both sides are
    /// settled and their votes follow the new balances.
    pub fn transfer_shares(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedTransferSharesIx,
    ) -> Result<(), ProgramError> {
        check_condition(args.amount > 0, "Zero transfer", DexError::ZeroAmount)?;

        let period = self.config.collecting_period;

        self.transact(|storage, effects| {
            let supply = storage.pairs
                .get(&args.pair_id)
                .ok_or(DexError::PairNotFound)?
                .total_supply;

            let from_before = storage.shares.balance_of(&args.pair_id, caller);
            check_condition(from_before >= args.amount, "Not enough shares", DexError::InsufficientShares)?;

            if *caller == args.to {
                return Ok(());
            }

            let (from_after, to_after) = storage.shares.transfer(&args.pair_id, caller, &args.to, args.amount)?;
            let to_before = to_after - args.amount;

            solana_program::msg!("transfer: {} -> {}: {}", caller, args.to, args.amount);

            if let Some(bucket) = storage.buckets.get_mut(&args.pair_id) {
                update_holder(bucket, effects, caller, &NO_DELEGATE, from_before, from_after, supply, clock, period)?;
                update_holder(bucket, effects, &args.to, &NO_DELEGATE, to_before, to_after, supply, clock, period)?;
            }

            Ok(())
        })
    }
}

pub fn process_transfer_shares<T, C, G>(
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
    let raw_args = TransferSharesIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.transfer_shares(signer, clock, args)
}
