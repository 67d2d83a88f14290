use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Points the caller's whole balance at `candidate`. Voting for
    /// `NO_DELEGATE` withdraws the caller's vote. Returns the active
    /// delegate afterwards.
    pub fn vote(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedVoteIx,
    ) -> Result<Pubkey, ProgramError> {
        self.transact(|storage, effects| {
            let weight = storage.shares.balance_of(&args.pair_id, caller);
            let bucket = storage.bucket_mut(&args.pair_id)?;

            check_condition(weight > 0, "Voter balance is 0", DexError::InsufficientShares)?;

            solana_program::msg!("weight: {}", weight);

            if let Some(delegate) = bucket.vote(*caller, args.candidate, weight, clock.unix_timestamp)? {
                solana_program::msg!("delegate: {}", delegate);
                effects.push(Effect::SetDelegate { bucket: bucket.address, delegate });
            }

            Ok(bucket.current_delegate())
        })
    }
}

pub fn process_vote<T, C, G>(
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
    let raw_args = VoteIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.vote(signer, clock, args)?;

    Ok(())
}
