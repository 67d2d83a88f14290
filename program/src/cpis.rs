use steel::*;

/// Moves fungible tokens between accounts. Fails loudly on insufficient
/// balance or allowance.
pub trait AssetTransfer {
    fn transfer(&self, from: &Pubkey, to: &Pubkey, token: &Pubkey, amount: u64) -> ProgramResult;
}

/// The component holding a pair's native collateral and delegating it.
pub trait Custodian {
    fn set_delegate(&self, bucket: &Pubkey, delegate: &Pubkey) -> ProgramResult;
    fn deposit(&self, bucket: &Pubkey, amount: u64) -> ProgramResult;
    fn withdraw(&self, bucket: &Pubkey, receiver: &Pubkey, amount: u64) -> ProgramResult;
    fn apply_ban(&self, bucket: &Pubkey, subject: &Pubkey, period: u64) -> ProgramResult;
}

pub trait AdminGate {
    fn is_admin(&self, who: &Pubkey) -> bool;
    fn is_manager(&self, who: &Pubkey) -> bool;
}

/// An outbound call collected while an operation runs on staged state.
/// Effects are issued in order once the operation itself succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Transfer { from: Pubkey, to: Pubkey, token: Pubkey, amount: u64 },
    Deposit { bucket: Pubkey, amount: u64 },
    Withdraw { bucket: Pubkey, receiver: Pubkey, amount: u64 },
    SetDelegate { bucket: Pubkey, delegate: Pubkey },
    ApplyBan { bucket: Pubkey, subject: Pubkey, period: u64 },
}

pub fn apply_effect<T, C>(transfers: &T, custodian: &C, effect: &Effect) -> ProgramResult
where
    T: AssetTransfer,
    C: Custodian,
{
    match *effect {
        Effect::Transfer { from, to, token, amount } => transfers.transfer(&from, &to, &token, amount),
        Effect::Deposit { bucket, amount } => custodian.deposit(&bucket, amount),
        Effect::Withdraw { bucket, receiver, amount } => custodian.withdraw(&bucket, &receiver, amount),
        Effect::SetDelegate { bucket, delegate } => custodian.set_delegate(&bucket, &delegate),
        Effect::ApplyBan { bucket, subject, period } => custodian.apply_ban(&bucket, &subject, period),
    }
}
