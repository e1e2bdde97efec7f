use std::fmt;
use std::str::FromStr;

use super::InputError;

/// Transaction mode used by atlas when applying migration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    /// Wrap the whole execution in one transaction.
    All,
    /// Run without transactions.
    None,
    /// One transaction per migration file.
    File,
}

impl TxMode {
    pub const VALUES: &'static [&'static str] = &["all", "none", "file"];

    pub fn label(self) -> &'static str {
        match self {
            TxMode::All => "all",
            TxMode::None => "none",
            TxMode::File => "file",
        }
    }
}

impl fmt::Display for TxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TxMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TxMode::All),
            "none" => Ok(TxMode::None),
            "file" => Ok(TxMode::File),
            _ => Err(InputError::InvalidEnum {
                input: "tx-mode",
                value: s.to_string(),
                allowed: TxMode::VALUES,
            }),
        }
    }
}
