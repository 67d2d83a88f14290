use steel::*;
use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum InstructionType {
    Unknown = 0,

    LaunchExchangeIx,
    InvestLiquidityIx,
    DivestLiquidityIx,
    SwapIx,

    VoteIx,
    WithdrawProfitIx,
    BanIx,

    TransferSharesIx,
    ReceiveRewardIx,

    SwapRouteIx,
}

instruction!(InstructionType, LaunchExchangeIx);
instruction!(InstructionType, InvestLiquidityIx);
instruction!(InstructionType, DivestLiquidityIx);
instruction!(InstructionType, SwapIx);
instruction!(InstructionType, VoteIx);
instruction!(InstructionType, WithdrawProfitIx);
instruction!(InstructionType, BanIx);
instruction!(InstructionType, TransferSharesIx);
instruction!(InstructionType, ReceiveRewardIx);
instruction!(InstructionType, SwapRouteIx);

fn deadline_to_bytes(deadline: Option<i64>) -> (u8, [u8; 8]) {
    match deadline {
        Some(deadline) => (1, deadline.to_le_bytes()),
        None => (0, [0; 8]),
    }
}

fn deadline_from_bytes(has_deadline: u8, deadline: [u8; 8]) -> Option<i64> {
    (has_deadline != 0).then(|| i64::from_le_bytes(deadline))
}

#[derive(Debug)]
pub struct ParsedLaunchExchangeIx {
    pub token_a: Pubkey,
    pub token_b: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub candidate: Pubkey,
    pub deadline: Option<i64>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LaunchExchangeIx {
    pub token_a: [u8; 32],
    pub token_b: [u8; 32],
    pub amount_a: [u8; 8],
    pub amount_b: [u8; 8],
    pub candidate: [u8; 32],
    pub has_deadline: u8,
    pub deadline: [u8; 8],
}

impl LaunchExchangeIx {
    pub fn from_struct(parsed: ParsedLaunchExchangeIx) -> Self {
        let (has_deadline, deadline) = deadline_to_bytes(parsed.deadline);
        Self {
            token_a: parsed.token_a.to_bytes(),
            token_b: parsed.token_b.to_bytes(),
            amount_a: parsed.amount_a.to_le_bytes(),
            amount_b: parsed.amount_b.to_le_bytes(),
            candidate: parsed.candidate.to_bytes(),
            has_deadline,
            deadline,
        }
    }

    pub fn to_struct(&self) -> ParsedLaunchExchangeIx {
        ParsedLaunchExchangeIx {
            token_a: Pubkey::new_from_array(self.token_a),
            token_b: Pubkey::new_from_array(self.token_b),
            amount_a: u64::from_le_bytes(self.amount_a),
            amount_b: u64::from_le_bytes(self.amount_b),
            candidate: Pubkey::new_from_array(self.candidate),
            deadline: deadline_from_bytes(self.has_deadline, self.deadline),
        }
    }
}

#[derive(Debug)]
pub struct ParsedInvestLiquidityIx {
    pub pair_id: Pubkey,
    pub shares: u64,
    pub max_a_in: u64,
    pub max_b_in: u64,
    pub candidate: Pubkey,   // NO_DELEGATE keeps the current vote
    pub deadline: Option<i64>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct InvestLiquidityIx {
    pub pair_id: [u8; 32],
    pub shares: [u8; 8],
    pub max_a_in: [u8; 8],
    pub max_b_in: [u8; 8],
    pub candidate: [u8; 32],
    pub has_deadline: u8,
    pub deadline: [u8; 8],
}

impl InvestLiquidityIx {
    pub fn from_struct(parsed: ParsedInvestLiquidityIx) -> Self {
        let (has_deadline, deadline) = deadline_to_bytes(parsed.deadline);
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            shares: parsed.shares.to_le_bytes(),
            max_a_in: parsed.max_a_in.to_le_bytes(),
            max_b_in: parsed.max_b_in.to_le_bytes(),
            candidate: parsed.candidate.to_bytes(),
            has_deadline,
            deadline,
        }
    }

    pub fn to_struct(&self) -> ParsedInvestLiquidityIx {
        ParsedInvestLiquidityIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            shares: u64::from_le_bytes(self.shares),
            max_a_in: u64::from_le_bytes(self.max_a_in),
            max_b_in: u64::from_le_bytes(self.max_b_in),
            candidate: Pubkey::new_from_array(self.candidate),
            deadline: deadline_from_bytes(self.has_deadline, self.deadline),
        }
    }
}

#[derive(Debug)]
pub struct ParsedDivestLiquidityIx {
    pub pair_id: Pubkey,
    pub shares: u64,
    pub min_a_out: u64,
    pub min_b_out: u64,
    pub candidate: Pubkey,
    pub deadline: Option<i64>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DivestLiquidityIx {
    pub pair_id: [u8; 32],
    pub shares: [u8; 8],
    pub min_a_out: [u8; 8],
    pub min_b_out: [u8; 8],
    pub candidate: [u8; 32],
    pub has_deadline: u8,
    pub deadline: [u8; 8],
}

impl DivestLiquidityIx {
    pub fn from_struct(parsed: ParsedDivestLiquidityIx) -> Self {
        let (has_deadline, deadline) = deadline_to_bytes(parsed.deadline);
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            shares: parsed.shares.to_le_bytes(),
            min_a_out: parsed.min_a_out.to_le_bytes(),
            min_b_out: parsed.min_b_out.to_le_bytes(),
            candidate: parsed.candidate.to_bytes(),
            has_deadline,
            deadline,
        }
    }

    pub fn to_struct(&self) -> ParsedDivestLiquidityIx {
        ParsedDivestLiquidityIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            shares: u64::from_le_bytes(self.shares),
            min_a_out: u64::from_le_bytes(self.min_a_out),
            min_b_out: u64::from_le_bytes(self.min_b_out),
            candidate: Pubkey::new_from_array(self.candidate),
            deadline: deadline_from_bytes(self.has_deadline, self.deadline),
        }
    }
}

#[derive(Debug)]
pub struct ParsedSwapIx {
    pub pair_id: Pubkey,
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub min_amount_out: u64,
    pub receiver: Pubkey,
    pub deadline: Option<i64>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SwapIx {
    pub pair_id: [u8; 32],
    pub direction: u8,
    pub amount_in: [u8; 8],
    pub min_amount_out: [u8; 8],
    pub receiver: [u8; 32],
    pub has_deadline: u8,
    pub deadline: [u8; 8],
}

impl SwapIx {
    pub fn from_struct(parsed: ParsedSwapIx) -> Self {
        let (has_deadline, deadline) = deadline_to_bytes(parsed.deadline);
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            direction: parsed.direction.into(),
            amount_in: parsed.amount_in.to_le_bytes(),
            min_amount_out: parsed.min_amount_out.to_le_bytes(),
            receiver: parsed.receiver.to_bytes(),
            has_deadline,
            deadline,
        }
    }

    pub fn to_struct(&self) -> DexResult<ParsedSwapIx> {
        let direction = SwapDirection::try_from(self.direction)
            .map_err(|_| DexError::InvalidInstruction)?;

        Ok(ParsedSwapIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            direction,
            amount_in: u64::from_le_bytes(self.amount_in),
            min_amount_out: u64::from_le_bytes(self.min_amount_out),
            receiver: Pubkey::new_from_array(self.receiver),
            deadline: deadline_from_bytes(self.has_deadline, self.deadline),
        })
    }
}

#[derive(Debug)]
pub struct ParsedSwapRouteIx {
    pub hops: Vec<SwapHop>,
    pub amount_in: u64,
    pub min_amount_out: u64,   // Checked against the last hop only
    pub receiver: Pubkey,
    pub deadline: Option<i64>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SwapRouteIx {
    pub hop_count: u8,
    pub directions: [u8; MAX_ROUTE_HOPS],
    pub pair_ids: [[u8; 32]; MAX_ROUTE_HOPS],
    pub amount_in: [u8; 8],
    pub min_amount_out: [u8; 8],
    pub receiver: [u8; 32],
    pub has_deadline: u8,
    pub deadline: [u8; 8],
}

impl SwapRouteIx {
    pub fn from_struct(parsed: ParsedSwapRouteIx) -> DexResult<Self> {
        if parsed.hops.len() > MAX_ROUTE_HOPS {
            return Err(DexError::InvalidInstruction);
        }

        let mut directions = [0; MAX_ROUTE_HOPS];
        let mut pair_ids = [[0; 32]; MAX_ROUTE_HOPS];
        for (i, hop) in parsed.hops.iter().enumerate() {
            directions[i] = hop.direction.into();
            pair_ids[i] = hop.pair_id.to_bytes();
        }

        let (has_deadline, deadline) = deadline_to_bytes(parsed.deadline);
        Ok(Self {
            hop_count: parsed.hops.len() as u8,
            directions,
            pair_ids,
            amount_in: parsed.amount_in.to_le_bytes(),
            min_amount_out: parsed.min_amount_out.to_le_bytes(),
            receiver: parsed.receiver.to_bytes(),
            has_deadline,
            deadline,
        })
    }

    pub fn to_struct(&self) -> DexResult<ParsedSwapRouteIx> {
        let count = self.hop_count as usize;
        if count > MAX_ROUTE_HOPS {
            return Err(DexError::InvalidInstruction);
        }

        let hops = (0..count)
            .map(|i| {
                let direction = SwapDirection::try_from(self.directions[i])
                    .map_err(|_| DexError::InvalidInstruction)?;
                Ok(SwapHop {
                    pair_id: Pubkey::new_from_array(self.pair_ids[i]),
                    direction,
                })
            })
            .collect::<DexResult<Vec<_>>>()?;

        Ok(ParsedSwapRouteIx {
            hops,
            amount_in: u64::from_le_bytes(self.amount_in),
            min_amount_out: u64::from_le_bytes(self.min_amount_out),
            receiver: Pubkey::new_from_array(self.receiver),
            deadline: deadline_from_bytes(self.has_deadline, self.deadline),
        })
    }
}

#[derive(Debug)]
pub struct ParsedVoteIx {
    pub pair_id: Pubkey,
    pub candidate: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VoteIx {
    pub pair_id: [u8; 32],
    pub candidate: [u8; 32],
}

impl VoteIx {
    pub fn from_struct(parsed: ParsedVoteIx) -> Self {
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            candidate: parsed.candidate.to_bytes(),
        }
    }

    pub fn to_struct(&self) -> ParsedVoteIx {
        ParsedVoteIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            candidate: Pubkey::new_from_array(self.candidate),
        }
    }
}

#[derive(Debug)]
pub struct ParsedWithdrawProfitIx {
    pub pair_id: Pubkey,
    pub receiver: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct WithdrawProfitIx {
    pub pair_id: [u8; 32],
    pub receiver: [u8; 32],
}

impl WithdrawProfitIx {
    pub fn from_struct(parsed: ParsedWithdrawProfitIx) -> Self {
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            receiver: parsed.receiver.to_bytes(),
        }
    }

    pub fn to_struct(&self) -> ParsedWithdrawProfitIx {
        ParsedWithdrawProfitIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            receiver: Pubkey::new_from_array(self.receiver),
        }
    }
}

#[derive(Debug)]
pub struct ParsedBanIx {
    pub pair_id: Pubkey,
    pub subject: Pubkey,
    pub period: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BanIx {
    pub pair_id: [u8; 32],
    pub subject: [u8; 32],
    pub period: [u8; 8],
}

impl BanIx {
    pub fn from_struct(parsed: ParsedBanIx) -> Self {
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            subject: parsed.subject.to_bytes(),
            period: parsed.period.to_le_bytes(),
        }
    }

    pub fn to_struct(&self) -> ParsedBanIx {
        ParsedBanIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            subject: Pubkey::new_from_array(self.subject),
            period: u64::from_le_bytes(self.period),
        }
    }
}

#[derive(Debug)]
pub struct ParsedTransferSharesIx {
    pub pair_id: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TransferSharesIx {
    pub pair_id: [u8; 32],
    pub to: [u8; 32],
    pub amount: [u8; 8],
}

impl TransferSharesIx {
    pub fn from_struct(parsed: ParsedTransferSharesIx) -> Self {
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            to: parsed.to.to_bytes(),
            amount: parsed.amount.to_le_bytes(),
        }
    }

    pub fn to_struct(&self) -> ParsedTransferSharesIx {
        ParsedTransferSharesIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            to: Pubkey::new_from_array(self.to),
            amount: u64::from_le_bytes(self.amount),
        }
    }
}

#[derive(Debug)]
pub struct ParsedReceiveRewardIx {
    pub pair_id: Pubkey,
    pub amount: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ReceiveRewardIx {
    pub pair_id: [u8; 32],
    pub amount: [u8; 8],
}

impl ReceiveRewardIx {
    pub fn from_struct(parsed: ParsedReceiveRewardIx) -> Self {
        Self {
            pair_id: parsed.pair_id.to_bytes(),
            amount: parsed.amount.to_le_bytes(),
        }
    }

    pub fn to_struct(&self) -> ParsedReceiveRewardIx {
        ParsedReceiveRewardIx {
            pair_id: Pubkey::new_from_array(self.pair_id),
            amount: u64::from_le_bytes(self.amount),
        }
    }
}
