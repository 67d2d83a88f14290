mod mock;
mod print;

pub use mock::*;
pub use print::*;
