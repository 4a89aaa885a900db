use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::{error::OrcaManageError, events::Deposited, state::*};

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, OrcaManageError::InvalidAmount);

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.depositor_lp_token_account.to_account_info(),
        mint: ctx.accounts.lp_mint.to_account_info(),
        to: ctx.accounts.vault_lp_token_account.to_account_info(),
        authority: ctx.accounts.depositor.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.lp_mint.decimals)?;

    let vault = &mut ctx.accounts.vault;
    let total = vault.record_deposit(amount)?;

    msg!("Deposited {} LP tokens into vault {}, total {}", amount, vault.key(), total);
    emit!(Deposited {
        vault: vault.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        total_lp_tokens: total,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    pub depositor: Signer<'info>,

    #[account(
        mut,
        constraint = depositor_lp_token_account.owner == depositor.key() @ OrcaManageError::Unauthorized,
        constraint = depositor_lp_token_account.mint == lp_mint.key() @ OrcaManageError::MintMismatch,
    )]
    pub depositor_lp_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = vault.lp_token_account @ OrcaManageError::LpTokenAccountMismatch,
        constraint = vault_lp_token_account.mint == lp_mint.key() @ OrcaManageError::MintMismatch,
    )]
    pub vault_lp_token_account: Account<'info, TokenAccount>,

    pub lp_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}
