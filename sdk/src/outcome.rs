//! Result record of one state-changing call

use serde::{Deserialize, Serialize};
use solana_sdk::signature::Signature;

/// Signature is present iff the call succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutcome")]
pub struct TransactionOutcome {
    signature: Option<String>,
    success: bool,
}

impl TransactionOutcome {
    pub fn confirmed(signature: Signature) -> Self {
        Self {
            signature: Some(signature.to_string()),
            success: true,
        }
    }

    pub fn failed() -> Self {
        Self {
            signature: None,
            success: false,
        }
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[derive(Deserialize)]
struct RawOutcome {
    signature: Option<String>,
    success: bool,
}

impl TryFrom<RawOutcome> for TransactionOutcome {
    type Error = String;

    fn try_from(raw: RawOutcome) -> std::result::Result<Self, Self::Error> {
        match (&raw.signature, raw.success) {
            (Some(sig), true) if !sig.is_empty() => Ok(Self {
                signature: raw.signature,
                success: true,
            }),
            (None, false) => Ok(Self::failed()),
            _ => Err(format!(
                "inconsistent outcome: success={} with signature {:?}",
                raw.success, raw.signature
            )),
        }
    }
}
