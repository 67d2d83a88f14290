#![allow(unexpected_cfgs)]

pub mod consts;
pub mod error;
pub mod instruction;
pub mod math;
pub mod state;
pub mod pda;
pub mod utils;

#[cfg(not(target_os = "solana"))]
pub mod sdk;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::instruction::*;
    pub use crate::math::*;
    pub use crate::state::*;
    pub use crate::pda::*;
    pub use crate::utils::*;

    #[cfg(not(target_os = "solana"))]
    pub use crate::sdk::*;
}

use steel::*;

declare_id!("DexCoRe111111111111111111111111111111111111");
