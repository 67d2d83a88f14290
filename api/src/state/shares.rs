use std::collections::BTreeMap;
use steel::*;
use crate::error::*;

/// Share balances keyed by `(pair_id, owner)`. Zero balances are dropped so
/// the map only holds live positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareRegistry {
    balances: BTreeMap<(Pubkey, Pubkey), u64>,
}

impl ShareRegistry {
    pub fn balance_of(&self, pair_id: &Pubkey, owner: &Pubkey) -> u64 {
        self.balances.get(&(*pair_id, *owner)).copied().unwrap_or(0)
    }

    pub fn mint(&mut self, pair_id: &Pubkey, owner: &Pubkey, amount: u64) -> DexResult<u64> {
        let balance = self.balance_of(pair_id, owner)
            .checked_add(amount)
            .ok_or(DexError::MathOverflow)?;
        self.set(pair_id, owner, balance);
        Ok(balance)
    }

    pub fn burn(&mut self, pair_id: &Pubkey, owner: &Pubkey, amount: u64) -> DexResult<u64> {
        let balance = self.balance_of(pair_id, owner)
            .checked_sub(amount)
            .ok_or(DexError::InsufficientShares)?;
        self.set(pair_id, owner, balance);
        Ok(balance)
    }

    /// Moves `amount` between owners, returning both new balances.
    pub fn transfer(
        &mut self,
        pair_id: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> DexResult<(u64, u64)> {
        let from_balance = self.burn(pair_id, from, amount)?;
        let to_balance = self.mint(pair_id, to, amount)?;
        Ok((from_balance, to_balance))
    }

    /// Sum of all balances for a pair.
    pub fn total_of(&self, pair_id: &Pubkey) -> u128 {
        self.balances
            .range((*pair_id, Pubkey::default())..)
            .take_while(|((pair, _), _)| pair == pair_id)
            .map(|(_, amount)| *amount as u128)
            .sum()
    }

    fn set(&mut self, pair_id: &Pubkey, owner: &Pubkey, balance: u64) {
        if balance == 0 {
            self.balances.remove(&(*pair_id, *owner));
        } else {
            self.balances.insert((*pair_id, *owner), balance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_burn() {
        let mut shares = ShareRegistry::default();
        let pair = Pubkey::new_unique();
        let alice = Pubkey::new_unique();

        assert_eq!(shares.mint(&pair, &alice, 50).unwrap(), 50);
        assert_eq!(shares.burn(&pair, &alice, 20).unwrap(), 30);
        assert_eq!(shares.burn(&pair, &alice, 31), Err(DexError::InsufficientShares));
        assert_eq!(shares.balance_of(&pair, &alice), 30);
    }

    #[test]
    fn test_transfer_is_zero_sum() {
        let mut shares = ShareRegistry::default();
        let pair = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        shares.mint(&pair, &alice, 50).unwrap();
        shares.mint(&other, &bob, 7).unwrap();

        assert_eq!(shares.transfer(&pair, &alice, &bob, 50).unwrap(), (0, 50));
        assert_eq!(shares.total_of(&pair), 50);
        assert_eq!(shares.total_of(&other), 7);

        assert_eq!(shares.transfer(&pair, &alice, &bob, 1), Err(DexError::InsufficientShares));
    }
}
