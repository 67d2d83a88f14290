mod ban;
mod bucket;
mod config;
mod delegation;
mod pair;
mod reward;
mod shares;

pub use ban::*;
pub use bucket::*;
pub use config::*;
pub use delegation::*;
pub use pair::*;
pub use reward::*;
pub use shares::*;
