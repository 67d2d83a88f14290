use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Lists a new pair, or re-seeds a drained one, and mints the launcher's
    /// shares. Returns the pair id and the shares minted.
    pub fn launch_exchange(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedLaunchExchangeIx,
    ) -> Result<(Pubkey, u64), ProgramError> {
        check_deadline(args.deadline, clock.unix_timestamp)?;
        check_pair_tokens(&args.token_a, &args.token_b)?;

        let pair_id = self.pair_id_of(&args.token_a, &args.token_b);
        let period = self.config.collecting_period;

        self.transact(|storage, effects| {
            let pair = storage.pairs
                .entry(pair_id)
                .or_insert_with(|| {
                    let mut pair = Pair::new(args.token_a, args.token_b, None);
                    if pair.has_collateral() {
                        pair.bucket = Some(find_bucket_pda(&pair_id).0);
                    }
                    pair
                });

            check_condition(pair.is_drained(), "Pair already listed", DexError::PairAlreadyListed)?;

            // Amounts follow the pair's original token order
            let (amount_a, amount_b) = if pair.token_a == args.token_a {
                (args.amount_a, args.amount_b)
            } else {
                (args.amount_b, args.amount_a)
            };

            let shares = pair.launch(amount_a, amount_b, clock.unix_timestamp)?;

            solana_program::msg!("pair: {}", pair_id);
            solana_program::msg!("pools: {} / {}", amount_a, amount_b);
            solana_program::msg!("shares: {}", shares);

            let (token_a, token_b) = (pair.token_a, pair.token_b);
            self.pay_in(effects, pair, caller, &token_a, amount_a);
            self.pay_in(effects, pair, caller, &token_b, amount_b);

            if let Some(address) = pair.bucket {
                if !storage.buckets.contains_key(&pair_id) {
                    let bucket = Bucket::new(address, clock.slot, period)?;
                    storage.buckets.insert(pair_id, bucket);
                }
                let bucket = storage.buckets
                    .get_mut(&pair_id)
                    .ok_or(DexError::CustodianMissing)?;

                let before = storage.shares.balance_of(&pair_id, caller);
                let after = before.checked_add(shares).ok_or(DexError::MathOverflow)?;
                update_holder(bucket, effects, caller, &args.candidate, before, after, 0, clock, period)?;
            }

            storage.shares.mint(&pair_id, caller, shares)?;

            Ok((pair_id, shares))
        })
    }
}

pub fn process_launch_exchange<T, C, G>(
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
    let raw_args = LaunchExchangeIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    solana_program::msg!("Args: {:?}", args);

    dex.launch_exchange(signer, clock, args)?;

    Ok(())
}
