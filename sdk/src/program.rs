//! Typed handle to the deployed orca-manage program

use crate::{Result, SdkError, TransactionOutcome};
use anchor_client::{ClientError, Program};
use orca_manage::{Vault, VAULT_SEED};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Keypair};
use std::sync::Arc;
use tracing::{debug, info};

/// Accounts for a deposit signed by the provider's payer
#[derive(Debug, Clone, Copy)]
pub struct DepositRequest {
    pub vault: Pubkey,
    pub depositor_lp_token_account: Pubkey,
    pub vault_lp_token_account: Pubkey,
    pub lp_mint: Pubkey,
    pub amount: u64,
}

pub struct ProgramHandle {
    name: String,
    program: Program<Arc<Keypair>>,
    rpc: RpcClient,
    commitment: CommitmentConfig,
}

impl ProgramHandle {
    pub(crate) fn new(
        name: &str,
        program: Program<Arc<Keypair>>,
        rpc_url: &str,
        commitment: CommitmentConfig,
    ) -> Self {
        Self {
            name: name.to_string(),
            program,
            rpc: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            commitment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Pubkey {
        self.program.id()
    }

    /// Send one no-argument `initialize` transaction and wait for confirmation
    pub async fn initialize(&self) -> Result<TransactionOutcome> {
        debug!(program = %self.name, id = %self.id(), "sending initialize");
        let signature = self
            .program
            .request()
            .accounts(orca_manage::accounts::Initialize {})
            .args(orca_manage::instruction::Initialize {})
            .send()
            .await
            .map_err(|e| SdkError::invocation(&self.name, e))?;

        info!(program = %self.name, %signature, "initialize confirmed");
        Ok(TransactionOutcome::confirmed(signature))
    }

    /// Whether an executable account exists at the program id
    pub async fn is_deployed(&self) -> Result<bool> {
        let account = self
            .rpc
            .get_account_with_commitment(&self.id(), self.commitment)
            .await
            .map_err(|e| SdkError::SolanaClient(e.to_string()))?
            .value;
        Ok(account.is_some_and(|account| account.executable))
    }

    pub fn vault_address(&self, authority: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[VAULT_SEED, authority.as_ref()], &self.id()).0
    }

    /// Create the payer's vault, recording `lp_token_account` as its deposit target
    pub async fn initialize_vault(&self, lp_token_account: Pubkey) -> Result<TransactionOutcome> {
        let authority = self.program.payer();
        let vault = self.vault_address(&authority);
        debug!(program = %self.name, %vault, "sending initialize_vault");

        let signature = self
            .program
            .request()
            .accounts(orca_manage::accounts::InitializeVault {
                vault,
                authority,
                lp_token_account,
                system_program: solana_sdk::system_program::ID,
            })
            .args(orca_manage::instruction::InitializeVault {})
            .send()
            .await
            .map_err(|e| SdkError::invocation(&self.name, e))?;

        info!(program = %self.name, %vault, %signature, "vault initialized");
        Ok(TransactionOutcome::confirmed(signature))
    }

    pub async fn deposit(&self, request: DepositRequest) -> Result<TransactionOutcome> {
        debug!(program = %self.name, vault = %request.vault, amount = request.amount, "sending deposit");

        let signature = self
            .program
            .request()
            .accounts(orca_manage::accounts::Deposit {
                vault: request.vault,
                depositor: self.program.payer(),
                depositor_lp_token_account: request.depositor_lp_token_account,
                vault_lp_token_account: request.vault_lp_token_account,
                lp_mint: request.lp_mint,
                token_program: anchor_spl::token::ID,
            })
            .args(orca_manage::instruction::Deposit {
                amount: request.amount,
            })
            .send()
            .await
            .map_err(|e| SdkError::invocation(&self.name, e))?;

        info!(program = %self.name, vault = %request.vault, amount = request.amount, %signature, "deposit confirmed");
        Ok(TransactionOutcome::confirmed(signature))
    }

    pub async fn fetch_vault(&self, address: Pubkey) -> Result<Vault> {
        self.program
            .account::<Vault>(address)
            .await
            .map_err(|e| match e {
                ClientError::AccountNotFound => SdkError::AccountNotFound(address.to_string()),
                other => SdkError::from(other),
            })
    }
}

