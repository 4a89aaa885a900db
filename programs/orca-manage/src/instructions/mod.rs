pub mod deposit;
pub mod initialize;
pub mod initialize_vault;

pub use deposit::*;
pub use initialize::*;
pub use initialize_vault::*;
