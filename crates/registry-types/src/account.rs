use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_ACCOUNT_ID_LEN: usize = 64;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseAccountIdError {
    #[error("account ID exceeds {MAX_ACCOUNT_ID_LEN} bytes")]
    TooLong,
    #[error("account ID contains invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("account ID has a leading, trailing, or doubled separator")]
    MalformedSeparator,
}

/// An account identifier: lowercase alphanumerics separated by single
/// `.`, `_`, or `-` characters, at most 64 bytes.
///
/// The empty string is the distinguished *null account*. It is accepted by
/// the parser so callers can express the mint/burn endpoints of an ownership
/// change, but the registry never stores it as an owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// The null account, valid only as the `from` of a mint and the `to` of
    /// a burn at the notification level.
    pub fn null() -> Self {
        Self(String::new())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), ParseAccountIdError> {
        if value.len() > MAX_ACCOUNT_ID_LEN {
            return Err(ParseAccountIdError::TooLong);
        }
        let mut prev_separator = true; // rejects a leading separator
        for c in value.chars() {
            match c {
                'a'..='z' | '0'..='9' => prev_separator = false,
                '.' | '_' | '-' => {
                    if prev_separator {
                        return Err(ParseAccountIdError::MalformedSeparator);
                    }
                    prev_separator = true;
                }
                other => return Err(ParseAccountIdError::InvalidCharacter(other)),
            }
        }
        if prev_separator && !value.is_empty() {
            return Err(ParseAccountIdError::MalformedSeparator);
        }
        Ok(())
    }
}

impl FromStr for AccountId {
    type Err = ParseAccountIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for AccountId {
    type Error = ParseAccountIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
