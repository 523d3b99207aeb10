// ============================================================
// Layer 3 — Normalisation Policy
// ============================================================
// Decides when two records count as "the same text" and when a
// record counts as "empty". The keys themselves are produced by
// data::normalizer; this enum is just the choice.
//
//   exact    — byte-for-byte; only "" is empty
//   trim     — ignore leading/trailing whitespace
//   collapse — also fold invisible characters and inner runs of
//              whitespace into a single space (default)

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    Exact,
    Trim,
    #[default]
    Collapse,
}

impl NormalizationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact    => "exact",
            Self::Trim     => "trim",
            Self::Collapse => "collapse",
        }
    }
}

impl fmt::Display for NormalizationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed from CLI flags such as `--policy trim`
impl FromStr for NormalizationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact"    => Ok(Self::Exact),
            "trim"     => Ok(Self::Trim),
            "collapse" => Ok(Self::Collapse),
            other => Err(format!(
                "unknown normalisation policy '{other}' (expected exact, trim or collapse)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("TRIM".parse::<NormalizationPolicy>(), Ok(NormalizationPolicy::Trim));
        assert_eq!(" exact ".parse::<NormalizationPolicy>(), Ok(NormalizationPolicy::Exact));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!("nfc".parse::<NormalizationPolicy>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&NormalizationPolicy::Collapse).unwrap();
        assert_eq!(json, "\"collapse\"");
        let back: NormalizationPolicy = serde_json::from_str("\"trim\"").unwrap();
        assert_eq!(back, NormalizationPolicy::Trim);
    }
}
