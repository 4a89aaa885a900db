//! Emits confirmed signatures for human inspection

use crate::{Result, SdkError, TransactionOutcome};
use std::io::{self, Write};
use tracing::info;

pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the signature line; failed outcomes write nothing
    pub fn report(&mut self, outcome: &TransactionOutcome) -> Result<()> {
        let signature = outcome.signature().ok_or(SdkError::NothingToReport)?;
        info!(signature, "transaction confirmed");
        writeln!(self.out, "Your transaction signature {signature}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
