//! Instruction builders. Accounts carry only the signer; every address the
//! program needs travels in the instruction data.
use steel::*;
use crate::prelude::*;

pub fn build_launch_exchange_ix(
    signer: Pubkey,
    token_a: Pubkey,
    token_b: Pubkey,
    amount_a: u64,
    amount_b: u64,
    candidate: Pubkey,
    deadline: Option<i64>,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: LaunchExchangeIx::from_struct(
            ParsedLaunchExchangeIx {
                token_a,
                token_b,
                amount_a,
                amount_b,
                candidate,
                deadline,
            }
        ).to_bytes(),
    }
}

pub fn build_invest_liquidity_ix(
    signer: Pubkey,
    pair_id: Pubkey,
    shares: u64,
    max_a_in: u64,
    max_b_in: u64,
    candidate: Pubkey,
    deadline: Option<i64>,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: InvestLiquidityIx::from_struct(
            ParsedInvestLiquidityIx {
                pair_id,
                shares,
                max_a_in,
                max_b_in,
                candidate,
                deadline,
            }
        ).to_bytes(),
    }
}

pub fn build_divest_liquidity_ix(
    signer: Pubkey,
    pair_id: Pubkey,
    shares: u64,
    min_a_out: u64,
    min_b_out: u64,
    candidate: Pubkey,
    deadline: Option<i64>,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: DivestLiquidityIx::from_struct(
            ParsedDivestLiquidityIx {
                pair_id,
                shares,
                min_a_out,
                min_b_out,
                candidate,
                deadline,
            }
        ).to_bytes(),
    }
}

pub fn build_swap_ix(
    signer: Pubkey,
    pair_id: Pubkey,
    direction: SwapDirection,
    amount_in: u64,
    min_amount_out: u64,
    receiver: Pubkey,
    deadline: Option<i64>,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: SwapIx::from_struct(
            ParsedSwapIx {
                pair_id,
                direction,
                amount_in,
                min_amount_out,
                receiver,
                deadline,
            }
        ).to_bytes(),
    }
}

pub fn build_swap_route_ix(
    signer: Pubkey,
    hops: Vec<SwapHop>,
    amount_in: u64,
    min_amount_out: u64,
    receiver: Pubkey,
    deadline: Option<i64>,
) -> DexResult<Instruction> {
    Ok(Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: SwapRouteIx::from_struct(
            ParsedSwapRouteIx {
                hops,
                amount_in,
                min_amount_out,
                receiver,
                deadline,
            }
        )?.to_bytes(),
    })
}

pub fn build_vote_ix(signer: Pubkey, pair_id: Pubkey, candidate: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: VoteIx::from_struct(
            ParsedVoteIx {
                pair_id,
                candidate,
            }
        ).to_bytes(),
    }
}

pub fn build_withdraw_profit_ix(signer: Pubkey, pair_id: Pubkey, receiver: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: WithdrawProfitIx::from_struct(
            ParsedWithdrawProfitIx {
                pair_id,
                receiver,
            }
        ).to_bytes(),
    }
}

pub fn build_ban_ix(signer: Pubkey, pair_id: Pubkey, subject: Pubkey, period: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: BanIx::from_struct(
            ParsedBanIx {
                pair_id,
                subject,
                period,
            }
        ).to_bytes(),
    }
}

pub fn build_transfer_shares_ix(signer: Pubkey, pair_id: Pubkey, to: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true)],
        data: TransferSharesIx::from_struct(
            ParsedTransferSharesIx {
                pair_id,
                to,
                amount,
            }
        ).to_bytes(),
    }
}

pub fn build_receive_reward_ix(pair_id: Pubkey, amount: u64) -> Instruction {
    let (bucket_pda, _) = find_bucket_pda(&pair_id);

    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(bucket_pda, true)],
        data: ReceiveRewardIx::from_struct(
            ParsedReceiveRewardIx {
                pair_id,
                amount,
            }
        ).to_bytes(),
    }
}
