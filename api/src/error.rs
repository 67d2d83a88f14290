use steel::*;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum DexError {
    #[error("Pair doesn't exist")]
    PairNotFound = 0,
    #[error("Pair already listed")]
    PairAlreadyListed = 1,
    #[error("A pair needs two distinct tokens")]
    InvalidPair = 2,
    #[error("Amount must be greater than zero")]
    ZeroAmount = 3,
    #[error("No liquidity in the pool")]
    NoLiquidity = 4,
    #[error("Slippage exceeded")]
    SlippageExceeded = 5,
    #[error("Insufficient shares balance")]
    InsufficientShares = 6,
    #[error("Insufficient reserves")]
    InsufficientReserves = 7,
    #[error("Swapped amount is zero")]
    ZeroOutput = 8,
    #[error("Caller is not allowed to do this")]
    Unauthorized = 9,
    #[error("Another operation is in flight")]
    Reentrant = 10,
    #[error("Deadline expired")]
    DeadlineExpired = 11,
    #[error("Pair has no collateral custodian")]
    CustodianMissing = 12,
    #[error("Math overflow")]
    MathOverflow = 13,
    #[error("Malformed instruction data")]
    InvalidInstruction = 14,
    #[error("Invalid exchange configuration")]
    InvalidConfig = 15,
}

error!(DexError);

pub type DexResult<T> = Result<T, DexError>;
