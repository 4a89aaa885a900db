use anchor_lang::prelude::*;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    msg!("Greetings from: {:?}", ctx.program_id);
    Ok(())
}

/// No accounts: the call only proves the program is deployed and executable
#[derive(Accounts)]
pub struct Initialize {}
