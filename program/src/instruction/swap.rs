use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;
use crate::cpis::*;
use crate::exchange::*;

impl<T: AssetTransfer, C: Custodian, G: AdminGate> Exchange<T, C, G> {
    /// Sells `amount_in` of one side for the other, paying `receiver`.
    pub fn swap(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedSwapIx,
    ) -> Result<u64, ProgramError> {
        check_deadline(args.deadline, clock.unix_timestamp)?;

        let fee_bps = self.config.swap_fee_bps;

        self.transact(|storage, effects| {
            let pair = storage.pairs
                .get_mut(&args.pair_id)
                .ok_or(DexError::PairNotFound)?;

            let amount_out = pair.swap(
                args.direction,
                args.amount_in,
                args.min_amount_out,
                fee_bps,
                clock.unix_timestamp,
            )?;

            solana_program::msg!("direction: {:?}", args.direction);
            solana_program::msg!("selling: {}", args.amount_in);
            solana_program::msg!("for: {}", amount_out);
            solana_program::msg!("fee rate: {}", from_basis_points(fee_bps));

            let pair = &*pair;
            let (token_in, token_out) = pair.tokens(args.direction);
            self.pay_in(effects, pair, caller, &token_in, args.amount_in);
            self.pay_out(effects, pair, &args.receiver, &token_out, amount_out);

            Ok(amount_out)
        })
    }

    /// Swaps through `hops` in order, each hop selling what the previous one
    /// bought. Only the final output is checked against `min_amount_out`.
    pub fn swap_route(
        &self,
        caller: &Pubkey,
        clock: &Clock,
        args: ParsedSwapRouteIx,
    ) -> Result<u64, ProgramError> {
        check_deadline(args.deadline, clock.unix_timestamp)?;
        check_route(&args.hops)?;

        let fee_bps = self.config.swap_fee_bps;
        let last = args.hops.len() - 1;

        self.transact(|storage, effects| {
            let mut amount = args.amount_in;
            let mut held: Option<(Pubkey, Option<Pubkey>)> = None;

            for (i, hop) in args.hops.iter().enumerate() {
                let pair = storage.pairs
                    .get_mut(&hop.pair_id)
                    .ok_or(DexError::PairNotFound)?;
                let (token_in, token_out) = pair.tokens(hop.direction);

                match held {
                    None => self.pay_in(effects, pair, caller, &token_in, amount),
                    Some((token, source)) => {
                        check_condition(token == token_in, "Route is broken", DexError::InvalidPair)?;
                        self.pay_across(effects, source, native_bucket(pair, &token_in), &token_in, amount);
                    }
                }

                let min_amount_out = if i == last { args.min_amount_out } else { 0 };
                let amount_in = amount;
                amount = pair.swap(hop.direction, amount_in, min_amount_out, fee_bps, clock.unix_timestamp)?;

                solana_program::msg!("hop {}: {} -> {}", i, amount_in, amount);

                if i == last {
                    self.pay_out(effects, pair, &args.receiver, &token_out, amount);
                }
                held = Some((token_out, native_bucket(pair, &token_out)));
            }

            solana_program::msg!("fee rate: {}", from_basis_points(fee_bps));

            Ok(amount)
        })
    }
}

pub fn process_swap<T, C, G>(
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
    let raw_args = SwapIx::try_from_bytes(data)?;
    let args = raw_args.to_struct()?;

    solana_program::msg!("Args: {:?}", args);

    dex.swap(signer, clock, args)?;

    Ok(())
}

pub fn process_swap_route<T, C, G>(
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
    let raw_args = SwapRouteIx::try_from_bytes(data)?;
    let args = raw_args.to_struct()?;

    solana_program::msg!("Args: {:?}", args);

    dex.swap_route(signer, clock, args)?;

    Ok(())
}
