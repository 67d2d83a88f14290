use solana_program::clock::Clock;
use steel::*;
use dexcore_api::prelude::*;

pub mod cpis;
pub mod exchange;
pub mod guard;
pub mod instruction;

pub use cpis::*;
pub use exchange::*;
use instruction::*;

/// Decodes one instruction and runs it against `dex` on behalf of `signer`.
pub fn process_instruction<T, C, G>(
    dex: &Exchange<T, C, G>,
    program_id: &Pubkey,
    signer: &Pubkey,
    clock: &Clock,
    data: &[u8],
) -> ProgramResult
where
    T: AssetTransfer,
    C: Custodian,
    G: AdminGate,
{
    let (ix, data) = parse_instruction(&dexcore_api::ID, program_id, data)?;

    match ix {
        InstructionType::Unknown => return Err(ProgramError::InvalidInstructionData),

        InstructionType::LaunchExchangeIx => process_launch_exchange(dex, signer, clock, data)?,
        InstructionType::InvestLiquidityIx => process_invest_liquidity(dex, signer, clock, data)?,
        InstructionType::DivestLiquidityIx => process_divest_liquidity(dex, signer, clock, data)?,
        InstructionType::SwapIx => process_swap(dex, signer, clock, data)?,
        InstructionType::VoteIx => process_vote(dex, signer, clock, data)?,
        InstructionType::WithdrawProfitIx => process_withdraw_profit(dex, signer, clock, data)?,
        InstructionType::BanIx => process_ban(dex, signer, clock, data)?,
        InstructionType::TransferSharesIx => process_transfer_shares(dex, signer, clock, data)?,
        InstructionType::ReceiveRewardIx => process_receive_reward(dex, signer, clock, data)?,
        InstructionType::SwapRouteIx => process_swap_route(dex, signer, clock, data)?,
    }

    Ok(())
}
