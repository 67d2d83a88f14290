pub mod launch;
pub mod invest;
pub mod divest;
pub mod swap;
pub mod vote;
pub mod withdraw;
pub mod ban;
pub mod transfer;
pub mod reward;

pub use launch::*;
pub use invest::*;
pub use divest::*;
pub use swap::*;
pub use vote::*;
pub use withdraw::*;
pub use ban::*;
pub use transfer::*;
pub use reward::*;
