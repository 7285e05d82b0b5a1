//! Analysis category prefixes used to name config files

use crate::error::GenerateError;
use std::fmt;
use std::str::FromStr;

/// Analysis category a config file belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnalysisPrefix {
    #[default]
    Binary,
    Atu,
    Mic,
}

impl AnalysisPrefix {
    pub const ALL: [AnalysisPrefix; 3] = [Self::Binary, Self::Atu, Self::Mic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Atu => "atu",
            Self::Mic => "mic",
        }
    }

    /// Upper-cased tag passed to the univariate stats step
    pub fn upper(&self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Atu => "ATU",
            Self::Mic => "MIC",
        }
    }
}

impl fmt::Display for AnalysisPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisPrefix {
    type Err = GenerateError;

    /// Only the exact lowercase tags are accepted; they end up verbatim in file names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| GenerateError::InvalidPrefix(s.to_string()))
    }
}
