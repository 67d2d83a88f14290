use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Pays the caller's accrued staking reward to `receiver`.
    pub fn withdraw_profit(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedWithdrawProfitIx,
    ) -> Result<u64, ProgramError> {
        let period = self.config.collecting_period;

        self.transact(|storage, effects| {
            let supply = storage.pairs
                .get(&args.pair_id)
                .ok_or(DexError::PairNotFound)?
                .total_supply;
            let balance = storage.shares.balance_of(&args.pair_id, caller);
            let bucket = storage.bucket_mut(&args.pair_id)?;

            bucket.settle(supply, clock.slot, period)?;
            bucket.settle_user(caller, balance, balance)?;
            let amount = bucket.withdraw_reward(caller)?;

            solana_program::msg!("reward: {}", amount);

            if amount > 0 {
                effects.push(Effect::Withdraw {
                    bucket: bucket.address,
                    receiver: args.receiver,
                    amount,
                });
            }

            Ok(amount)
        })
    }
}

pub fn process_withdraw_profit<T, C, G>(
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
    let raw_args = WithdrawProfitIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.withdraw_profit(signer, clock, args)?;

    Ok(())
}
