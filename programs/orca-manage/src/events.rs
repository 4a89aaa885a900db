use anchor_lang::prelude::*;

/// Emitted when a vault PDA is created
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub lp_token_account: Pubkey,
}

/// Emitted after LP tokens land in a vault
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub total_lp_tokens: u64,
}
