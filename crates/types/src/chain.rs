use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a chain identifier string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainIdError {
    #[error("chain id must not be empty")]
    Empty,
    #[error("chain id must contain only decimal digits, got {value:?}")]
    NonDecimal { value: String },
    #[error("chain id does not fit an unsigned 128-bit integer: {value:?}")]
    Overflow { value: String },
}

/// String-encoded decimal chain identifier (e.g. `"1"` for mainnet).
///
/// The original string is preserved and used verbatim as the registry key;
/// the integer parse is a validity gate only, so `"01"` and `"1"` name
/// distinct chains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    /// Validate and wrap a chain identifier string.
    pub fn new(value: impl Into<String>) -> Result<Self, ChainIdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ChainIdError::Empty);
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChainIdError::NonDecimal { value });
        }
        if value.parse::<u128>().is_err() {
            return Err(ChainIdError::Overflow { value });
        }
        Ok(ChainId(value))
    }

    /// The chain id in its string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check whether the provided string is a valid chain identifier.
pub fn is_valid_chain_id(value: &str) -> bool {
    ChainId::new(value).is_ok()
}

impl From<ChainId> for String {
    fn from(value: ChainId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ChainId {
    type Error = ChainIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ChainId::new(value)
    }
}

impl std::str::FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainId::new(s)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_strings() {
        assert!(is_valid_chain_id("1"));
        assert!(is_valid_chain_id("137"));
        assert!(is_valid_chain_id("42161"));
        // Leading zeros are valid and preserved as-is.
        assert_eq!(ChainId::new("01").unwrap().as_str(), "01");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(ChainId::new("").unwrap_err(), ChainIdError::Empty);
    }

    #[test]
    fn rejects_non_decimal() {
        for bad in ["abc", "0x1", "-1", "+5", " 1", "1 ", "1.5"] {
            assert!(
                matches!(
                    ChainId::new(bad).unwrap_err(),
                    ChainIdError::NonDecimal { .. }
                ),
                "expected NonDecimal for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_overflowing_digits() {
        let huge = "9".repeat(60);
        assert!(matches!(
            ChainId::new(huge).unwrap_err(),
            ChainIdError::Overflow { .. }
        ));
    }

    #[test]
    fn serde_string_roundtrip() {
        let id = ChainId::new("137").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"137\"");

        let back: ChainId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
