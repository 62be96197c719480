//! Name normalization for human-readable ENS-style names.
//!
//! Normalized names:
//! - Must be non-empty
//! - Must not contain whitespace or control characters
//! - Are case-folded to Unicode lowercase (`Foo.eth` and `foo.eth` are the
//!   same name)
//! - Labels between dots must be non-empty (rejects `.eth`, `foo..eth`,
//!   `foo.eth.`)
//!
//! Every read and write path of the registry goes through [`EnsName::normalize`];
//! a raw name is never used as a storage key.

use serde::{Deserialize, Serialize};

/// Errors produced when normalizing a human-readable name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,
    #[error("name contains whitespace or control characters: {name:?}")]
    ForbiddenCharacter { name: String },
    #[error("name has an empty label: {name:?}")]
    EmptyLabel { name: String },
}

/// The normalized form of a human-readable name.
///
/// Two raw names that normalize to the same string are the same entry, so
/// this type only ever wraps already-normalized strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnsName(String);

impl EnsName {
    /// Normalize a raw name, returning the canonical storage form.
    pub fn normalize(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
            return Err(NameError::ForbiddenCharacter {
                name: name.to_string(),
            });
        }

        let folded = name.to_lowercase();

        if folded.split('.').any(|label| label.is_empty()) {
            return Err(NameError::EmptyLabel {
                name: name.to_string(),
            });
        }

        Ok(EnsName(folded))
    }

    /// The normalized name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EnsName> for String {
    fn from(value: EnsName) -> Self {
        value.0
    }
}

impl TryFrom<String> for EnsName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EnsName::normalize(&value)
    }
}

impl std::str::FromStr for EnsName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnsName::normalize(s)
    }
}

impl std::fmt::Display for EnsName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_to_one_key() {
        let a = EnsName::normalize("Foo.eth").unwrap();
        let b = EnsName::normalize("foo.eth").unwrap();
        let c = EnsName::normalize("FOO.ETH").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "foo.eth");
    }

    #[test]
    fn folds_unicode_case() {
        let name = EnsName::normalize("Üñî.eth").unwrap();
        assert_eq!(name.as_str(), "üñî.eth");
    }

    #[test]
    fn accepts_bare_labels() {
        assert!(EnsName::normalize("foo").is_ok());
        assert!(EnsName::normalize("sub.foo.eth").is_ok());
    }

    #[test]
    fn reject_empty_name() {
        assert_eq!(EnsName::normalize("").unwrap_err(), NameError::Empty);
    }

    #[test]
    fn reject_whitespace() {
        assert!(EnsName::normalize("has space.eth").is_err());
        assert!(EnsName::normalize("has\ttab.eth").is_err());
        assert!(EnsName::normalize("has\nnewline.eth").is_err());
        assert!(EnsName::normalize(" leading.eth").is_err());
    }

    #[test]
    fn reject_empty_labels() {
        assert!(EnsName::normalize(".eth").is_err());
        assert!(EnsName::normalize("foo..eth").is_err());
        assert!(EnsName::normalize("foo.eth.").is_err());
        assert!(EnsName::normalize(".").is_err());
    }

    #[test]
    fn serde_rejects_unnormalized_keys() {
        // Deserialization goes through normalize, so a raw-cased key cannot
        // sneak into restored state.
        let back: EnsName = serde_json::from_str("\"Foo.eth\"").unwrap();
        assert_eq!(back.as_str(), "foo.eth");

        assert!(serde_json::from_str::<EnsName>("\"bad name\"").is_err());
    }
}
