//! Orca Manage errors

use anchor_lang::prelude::*;

#[error_code]
pub enum OrcaManageError {
    #[msg("Deposit amount must be greater than zero")]
    InvalidAmount,

    #[msg("Token account is not the vault's LP token account")]
    LpTokenAccountMismatch,

    #[msg("Token mint does not match the vault's LP mint")]
    MintMismatch,

    #[msg("Token account is not owned by the signer")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
