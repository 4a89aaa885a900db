use anchor_client::ClientError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    /// The call did not resolve to a confirmed transaction
    #[error("Invocation of `{program}` failed: {source}")]
    InvocationFailure {
        program: String,
        #[source]
        source: Box<ClientError>,
    },

    #[error("Anchor client error: {0}")]
    AnchorClient(Box<ClientError>),

    #[error("Solana client error: {0}")]
    SolanaClient(String),

    #[error("Wallet not found at {}", .0.display())]
    MissingWallet(PathBuf),

    #[error("Invalid keypair at {}: {reason}", .path.display())]
    InvalidKeypair { path: PathBuf, reason: String },

    #[error("Invalid cluster: {0}")]
    InvalidCluster(String),

    #[error("Invalid commitment level: {0}")]
    InvalidCommitment(String),

    #[error("Workspace error: {0}")]
    Workspace(String),

    #[error("Program `{program}` not found for cluster `{cluster}`")]
    ProgramNotFound { program: String, cluster: String },

    #[error("Invalid program id for `{program}`: {value}")]
    InvalidProgramId { program: String, value: String },

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Nothing to report: transaction did not succeed")]
    NothingToReport,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    pub(crate) fn invocation(program: &str, source: ClientError) -> Self {
        Self::InvocationFailure {
            program: program.to_string(),
            source: Box::new(source),
        }
    }

    pub fn is_invocation_failure(&self) -> bool {
        matches!(self, Self::InvocationFailure { .. })
    }
}

impl From<ClientError> for SdkError {
    fn from(err: ClientError) -> Self {
        Self::AnchorClient(Box::new(err))
    }
}
