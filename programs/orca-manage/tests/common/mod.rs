#![allow(dead_code)]

use anchor_lang::prelude::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::*;
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

use orca_manage::{Vault, VAULT_SEED};

pub const LP_DECIMALS: u8 = 6;

// `processor!(orca_manage::entry)` is rejected: `entry` requires `&'info [AccountInfo<'info>]`
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = unsafe { std::mem::transmute::<&[AccountInfo], &[AccountInfo]>(accounts) };
    orca_manage::entry(program_id, accounts, data)
}

pub fn program_test() -> ProgramTest {
    ProgramTest::new("orca_manage", orca_manage::ID, processor!(process_instruction))
}

pub struct TestContext {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub program_id: Pubkey,
}

impl TestContext {
    pub async fn new() -> Self {
        let (banks_client, payer, _recent_blockhash) = program_test().start().await;

        Self {
            banks_client,
            payer,
            program_id: orca_manage::ID,
        }
    }

    /// Sign with the payer plus `signers` and return the fee payer's signature
    pub async fn send(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature, BanksClientError> {
        let recent_blockhash = self.banks_client.get_latest_blockhash().await?;
        let mut all_signers = vec![&self.payer];
        all_signers.extend_from_slice(signers);

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.payer.pubkey()),
            &all_signers,
            recent_blockhash,
        );
        let signature = tx.signatures[0];
        self.banks_client.process_transaction(tx).await?;
        Ok(signature)
    }

    pub async fn initialize(&mut self, program_id: Pubkey) -> Result<Signature, BanksClientError> {
        let ix = Instruction {
            program_id,
            accounts: orca_manage::accounts::Initialize {}.to_account_metas(None),
            data: orca_manage::instruction::Initialize {}.data(),
        };
        self.send(&[ix], &[]).await
    }

    pub async fn fund(&mut self, recipient: &Pubkey, lamports: u64) {
        let ix = system_instruction::transfer(&self.payer.pubkey(), recipient, lamports);
        self.send(&[ix], &[]).await.unwrap();
    }

    pub async fn create_mint(&mut self) -> Keypair {
        let mint = Keypair::new();
        let rent = self.banks_client.get_rent().await.unwrap();
        let space = spl_token::state::Mint::LEN;

        let ixs = [
            system_instruction::create_account(
                &self.payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(space),
                space as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::id(),
                &mint.pubkey(),
                &self.payer.pubkey(),
                None,
                LP_DECIMALS,
            )
            .unwrap(),
        ];
        self.send(&ixs, &[&mint]).await.unwrap();
        mint
    }

    pub async fn create_token_account(&mut self, mint: &Pubkey, owner: &Pubkey) -> Keypair {
        let account = Keypair::new();
        let rent = self.banks_client.get_rent().await.unwrap();
        let space = spl_token::state::Account::LEN;

        let ixs = [
            system_instruction::create_account(
                &self.payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(space),
                space as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_account(
                &spl_token::id(),
                &account.pubkey(),
                mint,
                owner,
            )
            .unwrap(),
        ];
        self.send(&ixs, &[&account]).await.unwrap();
        account
    }

    pub async fn mint_to(&mut self, mint: &Pubkey, destination: &Pubkey, amount: u64) {
        let ix = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            destination,
            &self.payer.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        self.send(&[ix], &[]).await.unwrap();
    }

    pub fn vault_address(&self, authority: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[VAULT_SEED, authority.as_ref()], &self.program_id).0
    }

    pub async fn initialize_vault(
        &mut self,
        authority: &Keypair,
        lp_token_account: Pubkey,
    ) -> Result<Signature, BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: orca_manage::accounts::InitializeVault {
                vault: self.vault_address(&authority.pubkey()),
                authority: authority.pubkey(),
                lp_token_account,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: orca_manage::instruction::InitializeVault {}.data(),
        };
        self.send(&[ix], &[authority]).await
    }

    pub async fn deposit(
        &mut self,
        vault: Pubkey,
        depositor: &Keypair,
        depositor_lp_token_account: Pubkey,
        vault_lp_token_account: Pubkey,
        lp_mint: Pubkey,
        amount: u64,
    ) -> Result<Signature, BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: orca_manage::accounts::Deposit {
                vault,
                depositor: depositor.pubkey(),
                depositor_lp_token_account,
                vault_lp_token_account,
                lp_mint,
                token_program: spl_token::id(),
            }
            .to_account_metas(None),
            data: orca_manage::instruction::Deposit { amount }.data(),
        };
        self.send(&[ix], &[depositor]).await
    }

    pub async fn vault(&mut self, address: Pubkey) -> Vault {
        let account = self
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .expect("vault account exists");
        Vault::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn token_balance(&mut self, address: Pubkey) -> u64 {
        let account = self
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .expect("token account exists");
        spl_token::state::Account::unpack(&account.data).unwrap().amount
    }
}

/// Assert the first instruction failed with the given custom program error
pub fn assert_custom_error<T: std::fmt::Debug>(result: Result<T, BanksClientError>, code: u32) {
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(actual),
        ))) => assert_eq!(actual, code),
        other => panic!("expected custom error {code}, got {other:?}"),
    }
}
