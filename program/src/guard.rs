use std::cell::Cell;
use dexcore_api::prelude::*;

/// Holds the exchange's `entered` flag for the duration of one operation and
/// releases it on every exit path, including errors.
pub struct ReentrancyGuard<'a> {
    entered: &'a Cell<bool>,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(entered: &'a Cell<bool>) -> DexResult<Self> {
        if entered.replace(true) {
            return Err(DexError::Reentrant);
        }
        Ok(Self { entered })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.entered.set(false);
    }
}
