use steel::*;
use solana_program::msg;
use crate::consts::*;
use crate::error::*;

pub fn check_condition(condition: bool, message: &str, error: DexError) -> DexResult<()> {
    if !condition {
        msg!("Failed condition: {}", message);
        return Err(error);
    }
    Ok(())
}

pub fn check_deadline(deadline: Option<i64>, now: i64) -> DexResult<()> {
    match deadline {
        Some(deadline) => check_condition(now <= deadline, "Deadline expired", DexError::DeadlineExpired),
        None => Ok(()),
    }
}

pub fn check_pair_tokens(token_a: &Pubkey, token_b: &Pubkey) -> DexResult<()> {
    check_condition(token_a != token_b, "Pair tokens must differ", DexError::InvalidPair)
}

/// Convert to f64 ratio (e.g., 30 -> 0.003)
pub fn from_basis_points(value: u64) -> f64 {
    value as f64 / FEE_DENOMINATOR as f64
}
