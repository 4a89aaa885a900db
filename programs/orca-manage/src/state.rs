//! Vault state

use anchor_lang::prelude::*;

/// Seed prefix for vault PDAs: `["vault", authority]`
pub const VAULT_SEED: &[u8] = b"vault";

/// Per-authority record of LP tokens held by the program
#[account]
#[derive(InitSpace, Debug)]
pub struct Vault {
    /// PDA bump, stored so later instructions skip the search
    pub bump: u8,
    /// Signer that created the vault
    pub authority: Pubkey,
    /// Token account that receives deposits
    pub lp_token_account: Pubkey,
    /// Sum of all deposits
    pub total_lp_tokens: u64,
}

impl Vault {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Add a deposit to the running total
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        self.total_lp_tokens = self
            .total_lp_tokens
            .checked_add(amount)
            .ok_or(crate::OrcaManageError::ArithmeticOverflow)?;
        Ok(self.total_lp_tokens)
    }
}
