use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{events::VaultInitialized, state::*};

pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.bump = ctx.bumps.vault;
    vault.authority = ctx.accounts.authority.key();
    vault.lp_token_account = ctx.accounts.lp_token_account.key();
    vault.total_lp_tokens = 0;

    msg!(
        "Vault {} initialized for {} (lp account {})",
        vault.key(),
        vault.authority,
        vault.lp_token_account
    );
    emit!(VaultInitialized {
        vault: vault.key(),
        authority: vault.authority,
        lp_token_account: vault.lp_token_account,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(
        init,
        payer = authority,
        space = Vault::SPACE,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub lp_token_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}
