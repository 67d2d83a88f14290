use steel::*;
use crate::consts::*;
use crate::error::*;
use crate::pda::*;

/// Runtime parameters of one exchange instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DexConfig {
    /// Custody account for non-native reserves.
    pub vault: Pubkey,
    pub swap_fee_bps: u64,
    /// Length of a reward period, in slots.
    pub collecting_period: u64,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            vault: find_vault_pda().0,
            swap_fee_bps: DEFAULT_SWAP_FEE_BPS,
            collecting_period: DEFAULT_COLLECTING_PERIOD,
        }
    }
}

impl DexConfig {
    pub fn validate(&self) -> DexResult<()> {
        if self.swap_fee_bps > MAX_SWAP_FEE_BPS || self.collecting_period == 0 {
            return Err(DexError::InvalidConfig);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(DexConfig::default().validate().is_ok());

        let config = DexConfig { swap_fee_bps: MAX_SWAP_FEE_BPS + 1, ..Default::default() };
        assert_eq!(config.validate(), Err(DexError::InvalidConfig));

        let config = DexConfig { collecting_period: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(DexError::InvalidConfig));
    }
}
