//! Program ids by name, read from the `[programs.<cluster>]` tables of `Anchor.toml`

use crate::{Result, SdkError};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use std::{collections::BTreeMap, path::Path, str::FromStr};

#[derive(Debug, Default, Deserialize)]
struct AnchorToml {
    #[serde(default)]
    programs: BTreeMap<String, BTreeMap<String, ProgramEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProgramEntry {
    Address(String),
    Detailed { address: String },
}

impl ProgramEntry {
    fn address(&self) -> &str {
        match self {
            Self::Address(address) | Self::Detailed { address } => address,
        }
    }
}

#[derive(Debug, Default)]
pub struct Workspace {
    // cluster -> normalised program name -> address
    programs: BTreeMap<String, BTreeMap<String, String>>,
}

impl Workspace {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Workspace(format!("{}: {}", path.display(), e)))?;
        contents.parse()
    }

    /// Address of `name` on `cluster`
    pub fn resolve(&self, cluster: &str, name: &str) -> Result<Pubkey> {
        let not_found = || SdkError::ProgramNotFound {
            program: name.to_string(),
            cluster: cluster.to_string(),
        };
        let address = self
            .programs
            .get(&cluster.to_ascii_lowercase())
            .ok_or_else(not_found)?
            .get(&normalize_name(name))
            .ok_or_else(not_found)?;

        Pubkey::from_str(address).map_err(|_| SdkError::InvalidProgramId {
            program: name.to_string(),
            value: address.clone(),
        })
    }

    pub fn program_names(&self, cluster: &str) -> Vec<&str> {
        self.programs
            .get(&cluster.to_ascii_lowercase())
            .map(|programs| programs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl FromStr for Workspace {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed: AnchorToml = toml::from_str(s).map_err(|e| SdkError::Workspace(e.to_string()))?;
        let mut programs: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (cluster, entries) in parsed.programs {
            let cluster = cluster.to_ascii_lowercase();
            let resolved = programs.entry(cluster.clone()).or_default();
            for (name, entry) in entries {
                let key = normalize_name(&name);
                if resolved.contains_key(&key) {
                    return Err(SdkError::Workspace(format!(
                        "program `{name}` listed twice for cluster `{cluster}`"
                    )));
                }
                resolved.insert(key, entry.address().to_string());
            }
        }
        Ok(Self { programs })
    }
}

/// `OrcaManage`, `orca-manage` and `orca_manage` all name the same program
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.trim().chars() {
        if c == '-' || c == '_' || c == ' ' {
            out.push('_');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_name_styles() {
        assert_eq!(normalize_name("OrcaManage"), "orca_manage");
        assert_eq!(normalize_name("orca-manage"), "orca_manage");
        assert_eq!(normalize_name("orca_manage"), "orca_manage");
        assert_eq!(normalize_name("LPVault2"), "lpvault2");
    }
}
