use steel::*;
use crate::consts::*;

/// Orders two token keys so `(a, b)` and `(b, a)` map to the same pair.
pub fn sort_tokens(token_a: &Pubkey, token_b: &Pubkey) -> (Pubkey, Pubkey) {
    if token_a <= token_b {
        (*token_a, *token_b)
    } else {
        (*token_b, *token_a)
    }
}

pub fn find_pair_pda(token_a: &Pubkey, token_b: &Pubkey) -> (Pubkey, u8) {
    let (lo, hi) = sort_tokens(token_a, token_b);
    Pubkey::find_program_address(
        &[PAIR, lo.as_ref(), hi.as_ref()],
        &crate::id(),
    )
}

pub fn find_bucket_pda(pair: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BUCKET, pair.as_ref()],
        &crate::id(),
    )
}

pub fn find_vault_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT],
        &crate::id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_pda_ignores_order() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        assert_eq!(find_pair_pda(&a, &b), find_pair_pda(&b, &a));
        assert_ne!(find_pair_pda(&a, &b).0, find_pair_pda(&a, &NATIVE_ASSET).0);
        assert_ne!(find_bucket_pda(&a).0, find_bucket_pda(&b).0);
    }
}
