use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Books staking income that arrived at a pair's bucket. Only the bucket
    /// itself may report it. The income is paid out over the next period.
    pub fn receive_reward(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedReceiveRewardIx,
    ) -> Result<(), ProgramError> {
        let period = self.config.collecting_period;

        self.transact(|storage, _effects| {
            let supply = storage.pairs
                .get(&args.pair_id)
                .ok_or(DexError::PairNotFound)?
                .total_supply;
            let bucket = storage.bucket_mut(&args.pair_id)?;

            check_condition(bucket.address == *caller, "Caller is not the bucket", DexError::Unauthorized)?;

            bucket.settle(supply, clock.slot, period)?;
            bucket.accrue(args.amount)?;

            solana_program::msg!("reward received: {}", args.amount);
            solana_program::msg!("next reward: {}", bucket.rewards.next_reward);

            Ok(())
        })
    }
}

pub fn process_receive_reward<T, C, G>(
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
    let raw_args = ReceiveRewardIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.receive_reward(signer, clock, args)
}
