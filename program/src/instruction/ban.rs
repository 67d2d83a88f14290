use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Bans `subject` from being delegated to for `period` seconds. A zero
    /// period lifts the ban. Admins and managers only.
    pub fn ban(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedBanIx,
    ) -> Result<(), ProgramError> {
        self.transact(|storage, effects| {
            check_condition(
                self.admin().is_admin(caller) || self.admin().is_manager(caller),
                "Caller is not an admin or manager",
                DexError::Unauthorized,
            )?;

            let bucket = storage.bucket_mut(&args.pair_id)?;
            bucket.ban(args.subject, args.period, clock.unix_timestamp);

            solana_program::msg!("banned: {} for {}", args.subject, args.period);

            effects.push(Effect::ApplyBan {
                bucket: bucket.address,
                subject: args.subject,
                period: args.period,
            });

            Ok(())
        })
    }
}

pub fn process_ban<T, C, G>(
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
    let raw_args = BanIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.ban(signer, clock, args)
}
