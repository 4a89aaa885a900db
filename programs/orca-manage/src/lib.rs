//! Orca Manage - Liquidity vault program for Orca LP positions
//!
//! Entry points:
//! - `initialize`: no-op smoke entry point, logs the program id
//! - `initialize_vault`: creates the per-authority vault PDA
//! - `deposit`: moves LP tokens into the vault and tracks the total

use anchor_lang::prelude::*;

declare_id!("F2GMv5BTFvvJofgkx8iMrNGT8K6BDm7UDYCqPZARM6Rq");

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod orca_manage {
    use super::*;

    /// Reachability check for a freshly deployed program
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Create the vault that tracks LP tokens for the signing authority
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault::initialize_vault(ctx)
    }

    /// Deposit LP tokens into the vault's token account
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }
}
